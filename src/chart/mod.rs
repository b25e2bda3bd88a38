/// Chart layer: turns a [`ModeFigure`](crate::data::model::ModeFigure) into a
/// PNG on disk.

pub mod render;
