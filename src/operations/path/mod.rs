mod closing;
mod resolve;

pub use closing::ClosingSegment;
pub use resolve::ResolveVertices;
