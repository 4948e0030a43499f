use std::time::Instant;

use clap::Parser;
use stlpool_mesh::{FlatMesh, IndexedMesh, SnappedMesh, TriangleMesh};
use stlpool_stl::read_stl;

mod args;

fn main() -> anyhow::Result<()> {
    simple_logger::init_with_level(log::Level::Info)?;
    let args = args::Args::parse();

    // Each pass re-opens the file and consumes it start to end on its own;
    // nothing is shared between the two reads, so the timings compare like
    // for like.
    let start = Instant::now();
    let flat: FlatMesh = read_stl(&args.stl_path)?;
    println!("Flat read time: {}ms", start.elapsed().as_millis());
    println!("Triangle count: {}", flat.triangle_count());
    println!();

    let start = Instant::now();
    let indexed: IndexedMesh = if args.snap {
        let snapped: SnappedMesh = read_stl(&args.stl_path)?;
        snapped.0
    } else {
        read_stl(&args.stl_path)?
    };
    println!("Dedup read time: {}ms", start.elapsed().as_millis());
    println!("Triangle count: {}", indexed.triangle_count());
    println!("Distinct vertices: {}", indexed.pool.len());

    Ok(())
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use stlpool_mesh::{FlatMesh, IndexedMesh, TriangleMesh};
    use stlpool_stl::{read_stl, StlError};

    #[test]
    fn reads_both_forms_from_a_file_on_disk() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(&stlpool_test_data::cube()).unwrap();

        let flat: FlatMesh = read_stl(file.path()).unwrap();
        let indexed: IndexedMesh = read_stl(file.path()).unwrap();
        assert_eq!(12, flat.triangle_count());
        assert_eq!(12, indexed.triangle_count());
        assert_eq!(8, indexed.pool.len());
    }

    #[test]
    fn missing_file_reports_source_unavailable() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("not-there.stl");
        let err = read_stl::<FlatMesh, _>(&path).unwrap_err();
        assert!(matches!(err, StlError::SourceUnavailable { .. }));
    }
}
