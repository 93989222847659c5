use crate::config::Signature;

/// Every signature sharing no bit with `mask`, in increasing order.
///
/// The walk keeps `current | mask` as a superset of `mask`: adding one to it
/// carries through the bits of `mask` as though they were already set, and
/// clearing `mask` again leaves the next free-bit pattern. Starting from 0
/// it visits each subset of `!mask` exactly once, and stops when the carry
/// runs past `max_signature`.
///
/// With `mask = 0b0101` and four columns the walk is
/// `0b0000, 0b0010, 0b1000, 0b1010`.
pub struct DisjointSignatures {
    mask: Signature,
    max_signature: Signature,
    next: Option<Signature>,
}

impl DisjointSignatures {
    pub fn new(mask: Signature, max_signature: Signature) -> Self {
        Self {
            mask,
            max_signature,
            next: Some(0),
        }
    }
}

impl Iterator for DisjointSignatures {
    type Item = Signature;

    fn next(&mut self) -> Option<Self::Item> {
        let current = self.next?;
        // u64 so a full-width mask cannot overflow the carry.
        let step = ((current | self.mask) as u64 + 1) & !(self.mask as u64);
        self.next = if step <= self.max_signature as u64 {
            Some(step as Signature)
        } else {
            None
        };
        Some(current)
    }
}
