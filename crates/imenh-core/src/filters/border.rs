/// How out-of-bounds neighbours are resolved when a kernel overlaps the edge.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BorderMode {
    /// Mirror without repeating the edge pixel: `gfedcb|abcdefgh|gfedcba`.
    Reflect101,
    /// Repeat the edge pixel: `aaaaaa|abcdefgh|hhhhhhh`.
    Replicate,
}

impl BorderMode {
    /// Map a possibly out-of-range index onto `0..len`.
    #[inline]
    pub fn map(self, index: isize, len: usize) -> usize {
        match self {
            Self::Reflect101 => reflect_101(index, len),
            Self::Replicate => replicate(index, len),
        }
    }
}

/// Reflect-101 index mapping. Offsets further than one image length away
/// keep bouncing between the two edges.
#[inline]
pub fn reflect_101(index: isize, len: usize) -> usize {
    if len <= 1 {
        return 0;
    }
    let n = len as isize;
    let period = 2 * (n - 1);
    let i = index.rem_euclid(period);
    if i >= n {
        (period - i) as usize
    } else {
        i as usize
    }
}

#[inline]
pub fn replicate(index: isize, len: usize) -> usize {
    index.clamp(0, len as isize - 1) as usize
}
