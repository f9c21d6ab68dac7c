use core::fmt::Write;
use std::io;

use quickcheck::QuickCheck;
use quickcheck_macros::quickcheck;

use crate::ByteBuffer;

/// Appending in sequence yields exactly the concatenation, regardless of how
/// the appends are chunked.
#[quickcheck]
fn round_trip_arbitrary_chunks(chunks: Vec<Vec<u8>>) -> bool {
    let mut buf = ByteBuffer::new();
    for chunk in &chunks {
        buf.put(chunk);
    }
    let expected: Vec<u8> = chunks.concat();
    buf.as_bytes() == expected.as_slice()
}

/// Slices are independent copies of the requested sub-range.
#[test]
fn slice_matches_source_quickcheck() {
    fn prop(data: Vec<u8>, offset: usize, len: usize) -> bool {
        if data.is_empty() {
            return true;
        }
        let offset = offset % data.len();
        let len = len % (data.len() - offset + 1);
        let buf = ByteBuffer::from(data.clone());
        buf.slice(offset, len).as_bytes() == &data[offset..offset + len]
    }

    let tests = if is_ci::cached() { 10_000 } else { 1_000 };
    QuickCheck::new()
        .tests(tests)
        .quickcheck(prop as fn(Vec<u8>, usize, usize) -> bool);
}

/// Byte-at-a-time appends across the historical 1024-byte growth increment.
#[test]
fn round_trip_straddles_growth_boundaries() {
    for size in [1023usize, 1024, 1025] {
        let mut buf = ByteBuffer::new();
        for i in 0..size {
            #[allow(clippy::cast_possible_truncation)]
            buf.put_byte((i % 251) as u8);
        }
        assert_eq!(buf.len(), size);
        assert!(buf.capacity() >= size);
        for i in 0..size {
            #[allow(clippy::cast_possible_truncation)]
            let expected = (i % 251) as u8;
            assert_eq!(buf.byte_at(i), expected, "mismatch at {i} of {size}");
        }
    }
}

#[test]
fn mixed_append_forms_concatenate() {
    let mut buf = ByteBuffer::with_capacity(16);
    buf.put(b"ab");
    buf.put_str("cd");
    buf.put_byte(b'e');
    buf.put_byte_repeated(b'-', 3);
    buf.put_fmt(format_args!("{}", 42));
    write!(buf, "/{}", "end").unwrap();
    assert_eq!(buf.as_bytes(), b"abcde---42/end");
}

#[test]
fn with_capacity_honors_the_hint() {
    let buf = ByteBuffer::with_capacity(4096);
    assert!(buf.capacity() >= 4096);
    assert!(buf.is_empty());
}

#[test]
fn mutating_a_slice_leaves_the_source_untouched() {
    let mut source = ByteBuffer::from(b"0123456789".as_slice());
    let mut sliced = source.slice(3, 4);
    assert_eq!(sliced.as_bytes(), b"3456");

    sliced.put_str("mutated");
    sliced.drop_front(2);
    assert_eq!(source.as_bytes(), b"0123456789");

    // And the other direction: growing the source leaves the slice alone.
    source.put_str("more");
    assert_eq!(sliced.as_bytes(), b"56mutated");
}

#[test]
fn byte_at_returns_zero_out_of_range() {
    let buf = ByteBuffer::from(b"xyz".as_slice());
    assert_eq!(buf.byte_at(0), b'x');
    assert_eq!(buf.byte_at(2), b'z');
    assert_eq!(buf.byte_at(3), 0);
    assert_eq!(buf.byte_at(usize::MAX), 0);
}

#[test]
fn drop_front_shifts_remaining_bytes() {
    let mut buf = ByteBuffer::from(b"abcdef".as_slice());
    buf.drop_front(2);
    assert_eq!(buf.as_bytes(), b"cdef");
    buf.drop_front(0);
    assert_eq!(buf.as_bytes(), b"cdef");
}

#[test]
fn drop_front_past_the_end_empties_the_buffer() {
    let mut buf = ByteBuffer::from(b"abc".as_slice());
    buf.drop_front(3);
    assert!(buf.is_empty());

    let mut buf = ByteBuffer::from(b"abc".as_slice());
    buf.drop_front(100);
    assert!(buf.is_empty());
}

#[test]
fn read_from_drains_a_stream_in_chunks() {
    let data: Vec<u8> = (0..3000u32).map(|i| (i % 256) as u8).collect();
    let mut buf = ByteBuffer::new();
    let n = buf.read_from(&mut data.as_slice()).unwrap();
    assert_eq!(n, 3000);
    assert_eq!(buf.as_bytes(), data.as_slice());
}

#[test]
fn read_from_surfaces_io_errors() {
    struct Broken;
    impl io::Read for Broken {
        fn read(&mut self, _buf: &mut [u8]) -> io::Result<usize> {
            Err(io::Error::other("stream failed"))
        }
    }

    let mut buf = ByteBuffer::new();
    let err = buf.read_from(&mut Broken).unwrap_err();
    assert_eq!(err.to_string(), "stream failed");
}

#[test]
fn display_and_debug_go_through_bstr() {
    let buf = ByteBuffer::from(b"ok\xff".as_slice());
    assert_eq!(buf.to_string(), "ok\u{fffd}");
    // Debug escapes rather than replacing, and stays on one line.
    let debug = format!("{buf:?}");
    assert!(debug.starts_with('"') && debug.ends_with('"'), "{debug}");
    assert!(debug.contains("ok"), "{debug}");
}
