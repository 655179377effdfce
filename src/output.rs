//! Persistence for harvested records and the timeline document.
//!
//! Record lists go to JSON, the timeline document to YAML. Every write uses
//! the atomic temp-file-and-rename pattern so a crash never leaves a partial
//! file, and re-running a command overwrites rather than appends. Combined
//! with the aggregator being a pure function, writing the same input twice
//! produces byte-identical output.

use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::error::{HarvesterError, Result};
use crate::timeline::TimelineDocument;
use crate::types::{Act, Offence, OffenceCategory};

/// Directory for JSON record lists.
pub const JSON_DIR: &str = "JSONs";

/// Directory for filtered excerpt text files.
pub const TEXT_DIR: &str = "TEXTs";

/// Directory for the timeline YAML document.
pub const YAML_DIR: &str = "YAMLs";

/// Subdirectory for Criminal Notebook output.
pub const NOTEBOOK_SUBDIR: &str = "criminalnotebook";

/// File name of the aggregate acts list.
pub const ALL_ACTS_FILE: &str = "all_parliament_acts.json";

/// File name of the timeline document.
pub const TIMELINE_FILE: &str = "all_parliament_acts.yml";

/// Write content to a file atomically: temp file, sync, rename.
fn write_atomic(path: &Path, content: &[u8]) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }

    let temp_path = path.with_extension("tmp");
    {
        let mut file = File::create(&temp_path)?;
        file.write_all(content)?;
        file.sync_all()?;
    }

    // On Windows, rename fails if the destination already exists
    #[cfg(target_os = "windows")]
    if path.exists() {
        fs::remove_file(path)?;
    }

    fs::rename(&temp_path, path)?;
    Ok(())
}

/// Serialize a value as pretty JSON and write it atomically.
fn write_json<T: Serialize>(path: &Path, value: &T) -> Result<()> {
    let mut content = serde_json::to_string_pretty(value)?;
    content.push('\n');
    write_atomic(path, content.as_bytes())
}

/// Save a per-letter act record list.
///
/// # Returns
/// Path to `JSONs/<letter>/<letter>_parliament_acts.json`
pub fn save_letter_acts(acts: &[Act], letter: char, output_base: &Path) -> Result<PathBuf> {
    let path = output_base
        .join(JSON_DIR)
        .join(letter.to_string())
        .join(format!("{letter}_parliament_acts.json"));
    write_json(&path, &acts)?;
    Ok(path)
}

/// Save the aggregate act record list.
///
/// # Returns
/// Path to `JSONs/all_parliament_acts.json`
pub fn save_all_acts(acts: &[Act], output_base: &Path) -> Result<PathBuf> {
    let path = output_base.join(JSON_DIR).join(ALL_ACTS_FILE);
    write_json(&path, &acts)?;
    Ok(path)
}

/// Load a previously persisted act record list for aggregation.
pub fn load_acts(path: &Path) -> Result<Vec<Act>> {
    if !path.exists() {
        return Err(HarvesterError::ActsFileNotFound(path.to_path_buf()));
    }
    let content = fs::read_to_string(path)?;
    let acts = serde_json::from_str(&content)?;
    Ok(acts)
}

/// Save a category's offence records: the flat list plus a second document
/// grouping the records by punishment heading.
///
/// # Returns
/// Paths to the flat and grouped JSON files
pub fn save_offences(
    offences: &[Offence],
    category: OffenceCategory,
    output_base: &Path,
) -> Result<(PathBuf, PathBuf)> {
    let slug = category.page_slug().unwrap_or("unknown");
    let dir = output_base.join(JSON_DIR).join(NOTEBOOK_SUBDIR).join(slug);

    let flat_path = dir.join(format!("{slug}.json"));
    write_json(&flat_path, &offences)?;

    let mut grouped = serde_json::Map::new();
    for (punishment, members) in crate::offences::group_by_punishment(offences) {
        grouped.insert(punishment, serde_json::to_value(members)?);
    }
    let grouped_path = dir.join(format!("grouped_{slug}.json"));
    write_json(&grouped_path, &grouped)?;

    Ok((flat_path, grouped_path))
}

/// Save keyword-filtered excerpts for a category: one text file per source
/// page plus an aggregate file for the whole category.
///
/// The aggregate is rebuilt from scratch on every call so re-running never
/// duplicates content.
///
/// # Arguments
/// * `excerpts` - pairs of (page identifier, matching excerpt texts)
///
/// # Returns
/// Path to the aggregate text file
pub fn save_excerpts(
    excerpts: &[(String, Vec<String>)],
    category: OffenceCategory,
    output_base: &Path,
) -> Result<PathBuf> {
    let slug = category.page_slug().unwrap_or("unknown");
    let dir = output_base.join(TEXT_DIR).join(NOTEBOOK_SUBDIR).join(slug);

    let mut aggregate = String::new();
    for (page, texts) in excerpts {
        let mut content = String::new();
        for text in texts {
            content.push_str(text);
            content.push('\n');
        }
        write_atomic(&dir.join(format!("{page}.txt")), content.as_bytes())?;
        aggregate.push_str(&content);
    }

    let aggregate_path = output_base
        .join(TEXT_DIR)
        .join(NOTEBOOK_SUBDIR)
        .join(format!("{slug}.txt"));
    write_atomic(&aggregate_path, aggregate.as_bytes())?;
    Ok(aggregate_path)
}

/// Indent YAML sequences so items sit under their parent key.
///
/// serde_yaml_ng places sequence items (`- `) at the same indent as their
/// parent key. This function adds 2 spaces per nesting level, e.g.:
///
/// ```yaml
/// # Before:          # After:
/// periods:           periods:
/// - name: 1980's       - name: 1980's
///   acts: []             acts: []
/// ```
fn indent_yaml_sequences(yaml: &str) -> String {
    let mut result: Vec<String> = Vec::new();
    // Stack of indent levels where sequences start
    let mut seq_indents: Vec<usize> = Vec::new();

    for line in yaml.lines() {
        let trimmed = line.trim_start();

        // Pass empty lines through unchanged
        if trimmed.is_empty() {
            result.push(line.to_string());
            continue;
        }

        let indent = line.len() - trimmed.len();

        // Pop sequences we've exited: either moved to a shallower indent,
        // or returned to the same indent but not as a sequence continuation.
        while let Some(&seq_indent) = seq_indents.last() {
            if indent < seq_indent || (indent == seq_indent && !trimmed.starts_with("- ")) {
                seq_indents.pop();
            } else {
                break;
            }
        }

        // Detect new or continuing sequence
        if trimmed.starts_with("- ") {
            let is_continuation = seq_indents.last().is_some_and(|&si| si == indent);
            if !is_continuation {
                seq_indents.push(indent);
            }
        }

        // Apply extra indentation
        let extra = seq_indents.len() * 2;
        if extra > 0 {
            result.push(format!("{}{}", " ".repeat(indent + extra), trimmed));
        } else {
            result.push(line.to_string());
        }
    }

    result.join("\n")
}

/// Generate the YAML text of a timeline document.
pub fn generate_timeline_yaml(document: &TimelineDocument) -> Result<String> {
    let yaml = serde_yaml_ng::to_string(document)?;
    let yaml = indent_yaml_sequences(&yaml);

    let lines: Vec<&str> = yaml.lines().map(str::trim_end).collect();
    Ok(format!("---\n{}\n", lines.join("\n")))
}

/// Save a timeline document as YAML.
///
/// # Returns
/// Path to `YAMLs/all_parliament_acts.yml`
pub fn save_timeline(document: &TimelineDocument, output_base: &Path) -> Result<PathBuf> {
    let path = output_base.join(YAML_DIR).join(TIMELINE_FILE);
    let content = generate_timeline_yaml(document)?;
    write_atomic(&path, content.as_bytes())?;
    Ok(path)
}
