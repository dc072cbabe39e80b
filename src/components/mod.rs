pub mod graph_editor;
