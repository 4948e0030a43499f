use clap::Parser;

/// Reads a binary STL file twice and compares a flat triangle soup against a
/// vertex-deduplicated mesh, timing each pass.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Path to a binary STL file.
    pub stl_path: String,

    /// Snap coordinates to the nearest 0.001 before matching vertices.
    #[arg(long)]
    pub snap: bool,
}
