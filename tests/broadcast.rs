use tensor4::{ErrorKind, Tensor4};

#[test]
fn test_self_addition_doubles()
{
    #[rustfmt::skip]
    let data = vec![
         1,  2,  3,  4,
         5,  6,  7,  8,
         9, 10, 11, 12,

        13, 14, 15, 16,
        17, 18, 19, 20,
        21, 22, 23, 24,
    ];
    let mut t0 = Tensor4::from_shape_vec([1, 2, 3, 4], data.clone()).unwrap();
    let t1 = Tensor4::from_shape_vec([1, 2, 3, 4], data.clone()).unwrap();
    t0 += &t1;
    for (y, x) in t0.as_slice().iter().zip(&data) {
        assert_eq!(*y, x * 2);
    }
}

#[test]
fn test_partial_dimension_broadcast()
{
    // each length-4 innermost run receives one scalar from rhs
    #[rustfmt::skip]
    let d0 = vec![
        1., 1., 1., 1.,
        2., 2., 2., 2.,
        3., 3., 3., 3.,

        4., 4., 4., 4.,
        5., 5., 5., 5.,
        6., 6., 6., 6.,
    ];
    let d1 = vec![6., 5., 4., 3., 2., 1.];

    let mut t0 = Tensor4::from_shape_vec([1, 2, 3, 4], d0).unwrap();
    let t1 = Tensor4::from_shape_vec([1, 2, 3, 1], d1).unwrap();
    t0 += &t1;
    assert!(t0.as_slice().iter().all(|&x| x == 7.));
}

#[test]
fn test_full_broadcast_from_unit_tensor()
{
    let data: Vec<f64> = (0..24).map(f64::from).collect();
    let mut t0 = Tensor4::from_shape_vec([1, 2, 3, 4], data.clone()).unwrap();
    let t1 = Tensor4::from_shape_vec([1, 1, 1, 1], vec![1.]).unwrap();
    t0 += &t1;
    for (y, x) in t0.as_slice().iter().zip(&data) {
        assert_eq!(*y, x + 1.);
    }
}

#[test]
fn test_broadcast_middle_axes()
{
    // rhs [2, 1, 2, 1] against lhs [2, 4, 2, 2]
    let mut a = Tensor4::from_elem([2, 4, 2, 2], 0i32);
    let b = Tensor4::from_shape_vec([2, 1, 2, 1], vec![1, 2, 3, 4]).unwrap();
    a += &b;
    // first block of lhs sees rows 1, 2, the second 3, 4
    let expected = [
        1, 1, 2, 2, 1, 1, 2, 2, 1, 1, 2, 2, 1, 1, 2, 2, //
        3, 3, 4, 4, 3, 3, 4, 4, 3, 3, 4, 4, 3, 3, 4, 4,
    ];
    assert_eq!(a.as_slice(), &expected);
}

#[test]
fn test_accumulate_chaining()
{
    let mut a = Tensor4::from_elem([1, 2, 2, 2], 0);
    let ones = Tensor4::from_shape_vec([1, 1, 1, 1], vec![1]).unwrap();
    let twos = Tensor4::from_shape_vec([1, 1, 1, 1], vec![2]).unwrap();
    a.accumulate(&ones)
        .unwrap()
        .accumulate(&twos)
        .unwrap();
    assert!(a.as_slice().iter().all(|&x| x == 3));
}

#[test]
fn test_rhs_is_not_modified()
{
    let mut a = Tensor4::from_elem([2, 2, 2, 2], 1);
    let b = Tensor4::from_shape_vec([1, 1, 1, 2], vec![5, 7]).unwrap();
    a += &b;
    assert_eq!(b.as_slice(), &[5, 7]);
}

#[test]
fn test_incompatible_shape_leaves_lhs_unmodified()
{
    let before = vec![1, 2, 3, 4, 5, 6, 7, 8];
    let mut a = Tensor4::from_shape_vec([1, 2, 2, 2], before.clone()).unwrap();
    // extent 3 on axis 2 is neither 1 nor 2
    let b = Tensor4::from_elem([1, 2, 3, 2], 1);
    let e = a.accumulate(&b).unwrap_err();
    assert_eq!(e.kind(), ErrorKind::IncompatibleShape);
    assert_eq!(a.as_slice(), &before[..]);

    // lhs is never broadcast, even where its extent is 1
    let b = Tensor4::from_elem([4, 2, 2, 2], 1);
    let e = a.accumulate(&b).unwrap_err();
    assert_eq!(e.kind(), ErrorKind::IncompatibleShape);
    assert_eq!(a.as_slice(), &before[..]);
}

#[test]
fn test_zero_size_traversal()
{
    // accumulate over an empty tensor is a no-op, whatever rhs looks like
    let mut a = Tensor4::from_shape_vec([2, 0, 3, 4], Vec::<i32>::new()).unwrap();
    let unit = Tensor4::from_shape_vec([1, 1, 1, 1], vec![1]).unwrap();
    a.accumulate(&unit).unwrap();
    assert!(a.is_empty());

    let same = Tensor4::from_shape_vec([2, 0, 3, 4], Vec::new()).unwrap();
    a.accumulate(&same).unwrap();
    assert!(a.is_empty());
}
