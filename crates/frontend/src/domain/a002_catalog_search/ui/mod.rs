mod view;

pub use view::SearchBox;
