// OllaBridge site pages
// One view per `Page`; the app shell picks between them.

mod docs;
mod home;

pub use docs::{DOC_SECTIONS, DocSection, DocsPage};
pub use home::HomePage;
