use seam_core::alloc::BUFFER_ALIGN;
use seam_core::AlignedVec;

#[test]
fn aligned_vec_is_zeroed_and_aligned() {
    let mut v = AlignedVec::<f64>::zeroed(1000).unwrap();
    assert_eq!(v.len(), 1000);
    assert!(v.iter().all(|&x| x == 0.0));
    assert_eq!(v.as_ptr() as usize % BUFFER_ALIGN, 0);
    v[3] = 4.5;
    assert_eq!(v[3], 4.5);
}

#[test]
fn zero_length_buffer_is_fine() {
    let v = AlignedVec::<f32>::zeroed(0).unwrap();
    assert!(v.is_empty());
}
