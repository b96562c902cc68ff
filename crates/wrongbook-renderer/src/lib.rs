//! HTML document assembly for mistake notebooks.
//!
//! Walks the grouped question records and produces a single
//! self-contained HTML document, calling the asset resolver for every
//! image reference it encounters.
//!
//! # Architecture
//!
//! Two layout variants implement one [`GroupLayout`](layout) seam,
//! selected by [`GroupingMode`]:
//! - **Tabbed**: exam groups as switchable panels in first-seen order,
//!   first panel active.
//! - **Flat**: exam groups as stacked labeled sections, sorted
//!   lexicographically by label.
//!
//! Card rendering, the outcome-to-`<img>` contract, and the document
//! chrome are shared between the two.

mod card;
mod document;
mod html;
mod layout;

pub use document::{RenderOptions, render_notebook};
pub use html::{escape_html, image_tag};
pub use layout::GroupingMode;
