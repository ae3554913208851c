use splicescan_protocol::BaseComposition;

/// Base counts over a normalized (ACGT-only) sequence.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Composition {
    a: usize,
    c: usize,
    g: usize,
    t: usize,
    length: usize,
}

impl Composition {
    pub fn new_from_sequence(sequence: &[u8]) -> Self {
        let mut ret = Self {
            length: sequence.len(),
            ..Self::default()
        };
        for base in sequence {
            match base.to_ascii_uppercase() {
                b'A' => ret.a += 1,
                b'C' => ret.c += 1,
                b'G' => ret.g += 1,
                b'T' => ret.t += 1,
                _ => {}
            }
        }
        ret
    }

    #[inline(always)]
    pub fn length(&self) -> usize {
        self.length
    }

    #[inline(always)]
    pub fn count(&self, base: u8) -> usize {
        match base.to_ascii_uppercase() {
            b'A' => self.a,
            b'C' => self.c,
            b'G' => self.g,
            b'T' => self.t,
            _ => 0,
        }
    }

    /// G+C as a percentage of the length; 0 for an empty sequence.
    pub fn gc_content(&self) -> f64 {
        Self::percent(self.g + self.c, self.length)
    }

    pub fn base_percentages(&self) -> BaseComposition {
        BaseComposition {
            a: Self::percent(self.a, self.length),
            c: Self::percent(self.c, self.length),
            g: Self::percent(self.g, self.length),
            t: Self::percent(self.t, self.length),
        }
    }

    #[inline(always)]
    fn percent(count: usize, length: usize) -> f64 {
        if length == 0 {
            return 0.0;
        }
        count as f64 / length as f64 * 100.0
    }
}
