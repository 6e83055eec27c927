use crate::position::{Position, Tree};

use super::*;

impl <T: Ord> Heap<T> {
    pub(crate) fn sift_up(&mut self, index: usize) {
        let buffer = &mut self.contents[..];
        debug_assert!(index < buffer.len());
        let mut up_from = Position::new(index);
        while !up_from.is_root() {
            let up_to = up_from.parent();
            if buffer.at(up_from) >= buffer.at(up_to) {
                break;
            }
            buffer.swap_at(up_from, up_to);
            up_from = up_to;
        }
    }

    pub(crate) fn sift_down(&mut self, index: usize) {
        let buffer = &mut self.contents[..];
        debug_assert!(index < buffer.len());
        let mut down_from = Position::new(index);
        loop {
            let left = match buffer.left_child(down_from) {
                Some(left) => left,
                None => break,
            };
            let compare = match buffer.right_child(down_from) {
                Some(right) if buffer.at(right) < buffer.at(left) => right,
                _ => left,
            };
            if buffer.at(compare) >= buffer.at(down_from) {
                break;
            }
            buffer.swap_at(down_from, compare);
            down_from = compare;
        }
    }
}
