pub mod builder;
pub mod document;

pub use builder::FigureBuilder;
pub use document::FigureDocument;
