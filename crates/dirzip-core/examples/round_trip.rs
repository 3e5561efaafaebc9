//! Example: zipping a folder with a password and extracting it again.
//!
//! Run with: `cargo run --example round_trip`

use dirzip_core::CreationConfig;
use dirzip_core::ExtractionConfig;
use dirzip_core::Password;
use dirzip_core::create_archive_with_progress;
use dirzip_core::extract_archive;
use dirzip_core::naming::archive_path_for;
use dirzip_core::naming::extract_dir_for;
use dirzip_core::progress::ProgressCallback;
use dirzip_core::progress::ProgressUpdate;

struct PrintProgress;

impl ProgressCallback for PrintProgress {
    fn on_progress(&mut self, update: &ProgressUpdate) {
        println!("  progress: {:.2}%", update.percent);
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let work = tempfile::tempdir()?;
    let folder = work.path().join("docs");
    std::fs::create_dir_all(folder.join("sub"))?;
    std::fs::write(folder.join("a.txt"), "hello")?;
    std::fs::write(folder.join("sub/b.txt"), "0123456789")?;

    let password = Some(Password::new("abc123")?);

    println!("Creating archive");
    let archive = archive_path_for(&folder, work.path());
    let config = CreationConfig::default().with_password(password.clone());
    let report = create_archive_with_progress(&folder, &archive, &config, &mut PrintProgress)?;
    println!(
        "  {} entries, {} bytes -> {} bytes",
        report.entries_written(),
        report.bytes_written,
        report.bytes_compressed
    );

    println!("Extracting archive");
    let dest = extract_dir_for(&archive, work.path());
    let config = ExtractionConfig::default().with_password(password);
    let report = extract_archive(&archive, &dest, &config)?;
    println!(
        "  {} entries into {}",
        report.entries_written(),
        dest.display()
    );

    Ok(())
}
