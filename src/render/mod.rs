//! Rendering module: escaping, block and inline transformation, output.

mod block;
mod emoticons;
mod escape;
mod html;
mod inline;
mod json;
mod options;
mod result;

pub use block::{BlockStats, BlockTransformer};
pub use emoticons::{substitute_emoticons, EMOTICONS};
pub use escape::{escape_html, Escaper, HtmlEscaper};
pub use html::{to_html, HtmlRenderer};
pub use inline::InlineTransformer;
pub use json::{result_to_json, toc_to_json, JsonFormat};
pub use options::RenderOptions;
pub use result::{RenderResult, RenderStats};
