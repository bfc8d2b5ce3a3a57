//! sf-generator - object family definitions rendered to Rust
//!
//! Each [`model::Interface`] yields six files under
//! `<output-root>/<family>/`: the interface trait with rows and enums, the
//! option trees with their SQL walkers, request DTOs, the facade
//! implementation, validations and a unit-test skeleton.

pub mod defs;
pub mod dsl;
pub mod error;
pub mod model;
pub mod view;
pub mod writer;

pub use error::{GenError, GenResult};
pub use writer::{FileStatus, Writer};

use minijinja::Environment;
use model::Interface;
use std::path::{Path, PathBuf};

/// `(output file, template)` pairs, in write order.
pub const OUTPUTS: &[(&str, &str)] = &[
    ("interface_gen.rs", "interface.rs.j2"),
    ("options_gen.rs", "options.rs.j2"),
    ("dto_gen.rs", "dto.rs.j2"),
    ("impl_gen.rs", "impl.rs.j2"),
    ("validations_gen.rs", "validations.rs.j2"),
    ("gen_test.rs", "gen_test.rs.j2"),
];

/// Default output root, relative to the workspace.
pub const DEFAULT_OUTPUT_ROOT: &str = "crates/sf-sdk/src";

fn environment() -> GenResult<Environment<'static>> {
    let mut env = Environment::new();
    env.set_trim_blocks(true);
    env.set_lstrip_blocks(true);
    env.set_keep_trailing_newline(true);
    let templates = [
        ("interface.rs.j2", include_str!("../templates/interface.rs.j2")),
        ("options.rs.j2", include_str!("../templates/options.rs.j2")),
        ("dto.rs.j2", include_str!("../templates/dto.rs.j2")),
        ("impl.rs.j2", include_str!("../templates/impl.rs.j2")),
        ("validations.rs.j2", include_str!("../templates/validations.rs.j2")),
        ("gen_test.rs.j2", include_str!("../templates/gen_test.rs.j2")),
    ];
    for (name, source) in templates {
        env.add_template(name, source)
            .map_err(|source| GenError::Template {
                template: name.to_string(),
                interface: String::new(),
                source,
            })?;
    }
    Ok(env)
}

/// A rendered file, relative to the output root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedFile {
    pub path: PathBuf,
    pub content: String,
}

/// Render every output of one interface without touching the filesystem.
pub fn render_interface(interface: &Interface) -> GenResult<Vec<RenderedFile>> {
    let env = environment()?;
    let view = view::build(interface)?;
    OUTPUTS
        .iter()
        .map(|(file, template)| {
            let template_error = |source| GenError::Template {
                template: template.to_string(),
                interface: interface.name.clone(),
                source,
            };
            let content = env
                .get_template(template)
                .and_then(|t| t.render(&view))
                .map_err(template_error)?;
            Ok(RenderedFile {
                path: Path::new(&view.module).join(file),
                content,
            })
        })
        .collect()
}

/// Interfaces selected by name; all of them when `names` is empty.
pub fn select<'a>(interfaces: &'a [Interface], names: &[String]) -> GenResult<Vec<&'a Interface>> {
    if names.is_empty() {
        return Ok(interfaces.iter().collect());
    }
    names
        .iter()
        .map(|name| {
            interfaces
                .iter()
                .find(|i| i.name.eq_ignore_ascii_case(name))
                .ok_or_else(|| GenError::UnknownInterface(name.clone()))
        })
        .collect()
}

/// Outcome of one generation run.
#[derive(Debug, Default)]
pub struct Summary {
    pub written: Vec<PathBuf>,
    pub unchanged: Vec<PathBuf>,
    pub stale: Vec<PathBuf>,
}

/// Render `interfaces` and write them under `output_root`.
pub fn generate(interfaces: &[&Interface], output_root: &Path, writer: Writer) -> GenResult<Summary> {
    let mut summary = Summary::default();
    for interface in interfaces {
        for file in render_interface(interface)? {
            let path = output_root.join(&file.path);
            match writer.write(&path, &file.content)? {
                FileStatus::Written => summary.written.push(path),
                FileStatus::Unchanged => summary.unchanged.push(path),
                FileStatus::Stale => summary.stale.push(path),
            }
        }
    }
    Ok(summary)
}

#[cfg(test)]
#[path = "lib_test.rs"]
mod tests;
