//! Object numbering for the PDF writer.
//!
//! Objects are numbered in the order they are allocated, starting at 1. Pages
//! are keyed by their position in the document, not by their arena handle, so
//! numbering is stable no matter in which order pages were painted.

use pdf_writer::Ref;
use std::collections::HashMap;

#[derive(Eq, PartialEq, Hash, Copy, Clone, Debug)]
pub enum RefType {
    Catalog,
    Info,
    PageTree,
    Page(usize),
    Font(usize),
    ContentForPage(usize),
}

pub struct ObjectReferences {
    refs: HashMap<RefType, Ref>,
    next: Ref,
}

impl ObjectReferences {
    pub fn new() -> ObjectReferences {
        ObjectReferences {
            refs: HashMap::new(),
            next: Ref::new(1),
        }
    }

    /// The reference allocated for `ref_type`, if any
    pub fn get(&self, ref_type: RefType) -> Option<Ref> {
        self.refs.get(&ref_type).copied()
    }

    /// Allocate the next object number for `ref_type`
    pub fn gen(&mut self, ref_type: RefType) -> Ref {
        let id = self.next.bump();
        self.refs.insert(ref_type, id);
        id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn numbers_are_sequential_from_one() {
        let mut refs = ObjectReferences::new();
        assert_eq!(refs.gen(RefType::Catalog), Ref::new(1));
        assert_eq!(refs.gen(RefType::Page(0)), Ref::new(2));
        assert_eq!(refs.get(RefType::Catalog), Some(Ref::new(1)));
        assert_eq!(refs.get(RefType::Page(1)), None);
    }
}
