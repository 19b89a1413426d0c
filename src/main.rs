//! ocdformat - Columnar alignment for assignment-heavy source code

#![warn(clippy::all)]
#![warn(clippy::pedantic)]

use std::fs::File;
use std::io::{self, BufReader, Cursor, IsTerminal, Read, Write};
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicUsize, Ordering};

use glob::Pattern;
use ocdformat::process::format_file;
use ocdformat::{parse_args, CliArgs, Result};
use rayon::prelude::*;
use walkdir::WalkDir;

/// Source file extensions to process when walking directories.
/// The alignment heuristics assume `//` and `/* */` comment syntax, so the
/// defaults cover the C-family languages the tool was written for.
const SOURCE_EXTENSIONS: &[&str] = &[
    "java", "c", "h", "cc", "hh", "cpp", "hpp", "cxx", "cs", "js", "jsx", "ts", "tsx", "go", "kt",
    "kts", "rs", "scala", "swift",
];

/// Default maximum file size in bytes (100 MB)
/// Files larger than this are skipped to prevent memory exhaustion
const DEFAULT_MAX_FILE_SIZE: u64 = 100 * 1024 * 1024;

fn main() -> Result<()> {
    // Parse CLI arguments
    let args = parse_args();

    // Check if we should read from stdin
    let use_stdin =
        args.inputs.is_empty() || (args.inputs.len() == 1 && args.inputs[0].as_os_str() == "-");

    // If no inputs and running interactively, print usage; otherwise read from stdin
    if args.inputs.is_empty() && io::stdin().is_terminal() {
        print_usage();
        return Ok(());
    }

    if use_stdin {
        return process_stdin(&args);
    }

    // Configure thread pool if --jobs specified
    if let Some(jobs) = args.jobs {
        if jobs > 0 {
            if let Err(e) = rayon::ThreadPoolBuilder::new()
                .num_threads(jobs)
                .build_global()
            {
                eprintln!("Warning: failed to configure thread pool: {e}");
            }
        }
    }

    // Collect all files to process
    let files = collect_files(&args);

    if files.is_empty() {
        if !args.silent {
            eprintln!("No source files found to align.");
        }
        return Ok(());
    }

    // Process files; stdout/diff output must stay in input order
    let use_sequential = args.stdout || args.diff || args.jobs == Some(1);
    if use_sequential {
        process_files_sequential(&files, &args);
    } else {
        process_files_parallel(&files, &args);
    }

    Ok(())
}

/// Collect all files to process, handling directories and recursive flag
fn collect_files(args: &CliArgs) -> Vec<PathBuf> {
    // Compile exclude patterns
    let exclude_patterns: Vec<Pattern> = args
        .exclude
        .iter()
        .filter_map(|p| Pattern::new(p).ok())
        .collect();

    let custom_extensions = &args.extensions;

    let mut files = Vec::new();

    for input in &args.inputs {
        if input.is_file() {
            if !is_excluded(input, &exclude_patterns) {
                files.push(input.clone());
            }
        } else if input.is_dir() {
            if args.recursive {
                // Recursive directory traversal
                // Note: WalkDir detects symlink loops when follow_links(true) and
                // returns errors for them. We skip errors via filter_map(ok).
                // max_depth prevents runaway traversal in pathological directory structures.
                for entry in WalkDir::new(input)
                    .follow_links(true)
                    .max_depth(256)
                    .into_iter()
                    .filter_map(std::result::Result::ok)
                {
                    let path = entry.path();
                    if path.is_file()
                        && is_source_file(path, custom_extensions)
                        && !is_excluded(path, &exclude_patterns)
                    {
                        files.push(path.to_path_buf());
                    }
                }
            } else {
                // Non-recursive: only direct children
                if let Ok(entries) = std::fs::read_dir(input) {
                    for entry in entries.filter_map(std::result::Result::ok) {
                        let path = entry.path();
                        if path.is_file()
                            && is_source_file(&path, custom_extensions)
                            && !is_excluded(&path, &exclude_patterns)
                        {
                            files.push(path);
                        }
                    }
                }
            }
        }
    }

    files
}

/// Check if a path matches any exclusion pattern
fn is_excluded(path: &Path, patterns: &[Pattern]) -> bool {
    if patterns.is_empty() {
        return false;
    }

    let path_str = path.to_string_lossy();

    for pattern in patterns {
        // Match against full path
        if pattern.matches(&path_str) {
            return true;
        }

        // Match against file name only
        if let Some(file_name) = path.file_name() {
            if pattern.matches(&file_name.to_string_lossy()) {
                return true;
            }
        }

        // Match against each path component (for directory patterns)
        for component in path.components() {
            if let std::path::Component::Normal(c) = component {
                if pattern.matches(&c.to_string_lossy()) {
                    return true;
                }
            }
        }
    }

    false
}

/// Check if a file has a recognized source extension
/// Checks against both default extensions and any custom extensions provided
fn is_source_file(path: &Path, custom_extensions: &[String]) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| {
            // Check default extensions
            if SOURCE_EXTENSIONS.contains(&ext) {
                return true;
            }
            // Check custom extensions (with or without leading dot)
            for custom in custom_extensions {
                let custom_ext = custom.strip_prefix('.').unwrap_or(custom);
                if ext == custom_ext {
                    return true;
                }
            }
            false
        })
}

/// Process files sequentially (for stdout/diff output)
fn process_files_sequential(files: &[PathBuf], args: &CliArgs) {
    for path in files {
        if let Err(e) = process_single_file(path, args) {
            eprintln!("Error aligning {}: {}", path.display(), e);
        }
    }
}

/// Process files in parallel using Rayon
fn process_files_parallel(files: &[PathBuf], args: &CliArgs) {
    let success_count = AtomicUsize::new(0);
    let error_count = AtomicUsize::new(0);

    files.par_iter().for_each(|path| {
        match process_single_file(path, args) {
            Ok(()) => {
                success_count.fetch_add(1, Ordering::Relaxed);
            }
            Err(e) => {
                error_count.fetch_add(1, Ordering::Relaxed);
                eprintln!("Error aligning {}: {}", path.display(), e);
            }
        }
    });

    let success = success_count.load(Ordering::Relaxed);
    let errors = error_count.load(Ordering::Relaxed);

    if !args.silent {
        if errors == 0 {
            eprintln!("Aligned {success} files successfully.");
        } else {
            eprintln!("Aligned {success} files, {errors} errors.");
        }
    }
}

/// Process a single file
fn process_single_file(path: &PathBuf, args: &CliArgs) -> Result<()> {
    // Check file size BEFORE reading to prevent memory exhaustion
    let metadata = std::fs::metadata(path)?;
    let file_size = metadata.len();
    if file_size > DEFAULT_MAX_FILE_SIZE {
        if !args.silent {
            let size_mb = file_size / (1024 * 1024);
            let limit_mb = DEFAULT_MAX_FILE_SIZE / (1024 * 1024);
            eprintln!(
                "Skipping {} ({} MB exceeds limit of {} MB)",
                path.display(),
                size_mb,
                limit_mb
            );
        }
        return Ok(());
    }

    // Read input file into memory
    let mut file_contents = Vec::new();
    File::open(path)?.read_to_end(&mut file_contents)?;

    if !args.silent && !args.stdout {
        eprintln!("Aligning: {}", path.display());
    }

    // Align the file
    let reader = BufReader::new(Cursor::new(&file_contents));
    let mut output = Vec::new();
    let changed = format_file(reader, &mut output)?;

    // Output results
    if args.stdout {
        io::stdout().write_all(&output)?;
    } else if args.diff {
        if changed {
            if !args.silent {
                println!("=== {} ===", path.display());
            }
            io::stdout().write_all(&output)?;
        }
    } else if changed {
        // Write back to file (in-place); untouched files keep their mtime
        std::fs::write(path, &output)?;
    }

    Ok(())
}

/// Process input from stdin, output to stdout
fn process_stdin(args: &CliArgs) -> Result<()> {
    // Read all input from stdin
    let mut stdin_contents = Vec::new();
    io::stdin().read_to_end(&mut stdin_contents)?;

    // Check size after reading to prevent processing extremely large input
    #[allow(clippy::cast_possible_truncation)]
    let stdin_size = stdin_contents.len() as u64;
    if stdin_size > DEFAULT_MAX_FILE_SIZE {
        anyhow::bail!(
            "stdin input too large ({} MB exceeds limit of {} MB)",
            stdin_size / (1024 * 1024),
            DEFAULT_MAX_FILE_SIZE / (1024 * 1024)
        );
    }

    // Align the input
    let reader = BufReader::new(Cursor::new(&stdin_contents));
    let mut output = Vec::new();
    format_file(reader, &mut output)?;

    // Always output to stdout when reading from stdin
    io::stdout().write_all(&output)?;

    Ok(())
}

fn print_usage() {
    println!(
        "ocdformat v{} - columnar alignment for assignment blocks",
        env!("CARGO_PKG_VERSION")
    );
    println!();
    println!("Lines up declaration columns and equals signs in a block of code.");
    println!();
    println!("Usage:");
    println!("  ocdformat [OPTIONS] <FILE>...");
    println!("  ocdformat [OPTIONS] -r <DIRECTORY>");
    println!("  ocdformat [OPTIONS] -              # Read from stdin");
    println!("  cat block.java | ocdformat         # Pipe input");
    println!();
    println!("Examples:");
    println!("  ocdformat Fields.java              # Align single file in-place");
    println!("  ocdformat *.java                   # Align multiple files");
    println!("  ocdformat -r src/                  # Recursively align directory");
    println!("  ocdformat --stdout Fields.java     # Output to stdout");
    println!("  ocdformat - < block.txt            # Read from stdin, write to stdout");
    println!();
    println!("Options:");
    println!("  -s, --stdout                    Output to stdout");
    println!("  -d, --diff                      Show aligned output without modifying files");
    println!("  -r, --recursive                 Process directories recursively");
    println!("  -e, --exclude <PATTERN>         Exclude files/dirs matching pattern (repeatable)");
    println!("  -x, --ext <EXT>                 Additional source extension (repeatable)");
    println!("  -j, --jobs <NUM>                Parallel jobs (0=auto, 1=sequential)");
    println!("  -S, --silent                    Silent mode");
    println!("  -h, --help                      Print help");
    println!();
    println!("The alignment itself takes no options; behavior is fixed.");
}
