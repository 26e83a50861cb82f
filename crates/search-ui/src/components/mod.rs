pub mod enhancer;
pub mod help_link;

pub use enhancer::SearchEnhancer;
pub use help_link::HelpLink;
