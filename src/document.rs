use crate::{
    font::StandardFont,
    info::Info,
    page::Page,
    refs::{ObjectReferences, RefType},
    ReportError,
};
use id_arena::{Arena, Id};
use pdf_writer::{Pdf, Ref};
use std::io::Write;

#[derive(Default)]
/// A document is the buffered drawing surface of a report: it stores every
/// page until the whole thing is rendered out with a call to [Document::write]
pub struct Document {
    pub info: Option<Info>,
    pub pages: Arena<Page>,
    pub page_order: Vec<Id<Page>>,
}

impl Document {
    /// Sets information about the document. If not provided, no information block will be
    /// written to the PDF
    pub fn set_info(&mut self, info: Info) {
        self.info = Some(info);
    }

    /// Add a page to the end of the document, returning its handle. The handle stays
    /// valid for the lifetime of the document and can be used to revisit the page
    /// after later pages were added.
    pub fn add_page(&mut self, page: Page) -> Id<Page> {
        let id = self.pages.alloc(page);
        self.page_order.push(id);
        id
    }

    /// Number of pages in the document
    pub fn page_count(&self) -> usize {
        self.page_order.len()
    }

    /// Get the 0-based index of a page given its ID
    pub fn index_of_page(&self, page: Id<Page>) -> Option<usize> {
        self.page_order.iter().position(|&p| p == page)
    }

    /// Get the page Id of a page at the given index. Returns [None] if
    /// `page_index >= self.page_order.len()`.
    pub fn id_of_page_index(&self, page_index: usize) -> Option<Id<Page>> {
        self.page_order.get(page_index).copied()
    }

    /// Look up a page by handle
    pub fn page(&self, page: Id<Page>) -> Result<&Page, ReportError> {
        self.pages.get(page).ok_or(ReportError::PageMissing)
    }

    /// Look up a page by handle, for painting
    pub fn page_mut(&mut self, page: Id<Page>) -> Result<&mut Page, ReportError> {
        self.pages.get_mut(page).ok_or(ReportError::PageMissing)
    }

    /// Pages in document order
    pub fn iter_pages(&self) -> impl Iterator<Item = &Page> {
        self.page_order.iter().filter_map(|&id| self.pages.get(id))
    }

    /// Write the entire document to the writer. Note: although this can write to arbitrary
    /// streams, the entire document is "rendered" in memory first. Until `write` is called,
    /// nothing is resolved, so pages can be painted on in any order.
    pub fn write<W: Write>(self, mut w: W) -> Result<(), ReportError> {
        let Document {
            info,
            pages,
            page_order,
        } = self;

        let mut refs = ObjectReferences::new();

        let catalog_id = refs.gen(RefType::Catalog);
        let page_tree_id = refs.gen(RefType::PageTree);

        let mut writer = Pdf::new();
        if let Some(info) = info {
            info.write(&mut refs, &mut writer);
        }

        // page refs are keyed by position in the document, not by arena index
        let page_refs: Vec<Ref> = (0..page_order.len())
            .map(|i| refs.gen(RefType::Page(i)))
            .collect();

        writer
            .pages(page_tree_id)
            .count(page_refs.len() as i32)
            .kids(page_refs);

        for font in StandardFont::ALL {
            font.write(&mut refs, &mut writer);
        }

        for (page_index, id) in page_order.iter().enumerate() {
            let page = pages.get(*id).ok_or(ReportError::PageMissing)?;
            page.write(&mut refs, page_index, &mut writer)?;
        }

        writer.catalog(catalog_id).pages(page_tree_id);

        log::debug!("serialised document with {} pages", page_order.len());
        w.write_all(writer.finish().as_slice()).map_err(Into::into)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pagesize;

    #[test]
    fn page_handles_follow_document_order() {
        let mut doc = Document::default();
        let first = doc.add_page(Page::new(pagesize::A4, None));
        let second = doc.add_page(Page::new(pagesize::A4, None));
        assert_eq!(doc.page_count(), 2);
        assert_eq!(doc.index_of_page(second), Some(1));
        assert_eq!(doc.id_of_page_index(0), Some(first));
        assert_eq!(doc.id_of_page_index(2), None);
    }

    #[test]
    fn foreign_handles_are_rejected() {
        let mut other = Document::default();
        other.add_page(Page::new(pagesize::A4, None));
        let foreign = other.add_page(Page::new(pagesize::A4, None));

        let mut doc = Document::default();
        doc.add_page(Page::new(pagesize::A4, None));
        assert!(matches!(doc.page_mut(foreign), Err(ReportError::PageMissing)));
    }

    #[test]
    fn writes_a_pdf_header_and_trailer() {
        let mut doc = Document::default();
        doc.add_page(Page::new(pagesize::A4, None));
        let mut out: Vec<u8> = Vec::new();
        doc.write(&mut out).unwrap();
        assert!(out.starts_with(b"%PDF-"));
        assert!(out.ends_with(b"%%EOF") || out.ends_with(b"%%EOF\n"));
    }
}
