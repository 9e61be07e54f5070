//! Batch page enhancement: discover → parse → enhance → emit.
//!
//! The browser applied these transformations lazily, on document-ready;
//! here they run once over every page under [`INPUT_DIR`] and the result
//! is written under [`OUTPUT_DIR`]. Markdown sources go through the
//! subset renderer and the page shell first; HTML sources are enhanced
//! as-is. Each stage hands a typestate token to the next so the stages
//! cannot be reordered or skipped.

use std::{
    fs,
    path::{Path, PathBuf},
};

use color_eyre::{Section, eyre::eyre};
use itertools::{Either, Itertools};
use rayon::prelude::*;
use tracing::{debug, info};
use walkdir::{DirEntry, WalkDir};

use crate::{
    breadcrumb::{BreadcrumbGenerator, format_segment},
    code,
    config::{INPUT_DIR, OUTPUT_DIR},
    dom::Document,
    markdown,
    templates::page_shell,
    toc::TocGenerator,
    types::RelPath,
    widgets::progress,
};

/// A source file under the input tree, not yet parsed.
struct PageSource {
    rel: PathBuf,
    content: String,
    kind: SourceKind,
}

#[derive(Clone, Copy, PartialEq, Eq)]
enum SourceKind {
    Markdown,
    Html,
}

/// A parsed page addressed by its output path.
struct Page {
    rel_out: RelPath,
    doc: Document,
}

/// Build once into [`OUTPUT_DIR`] using the current working directory.
pub fn build_once() -> color_eyre::Result<()> {
    let root =
        std::env::current_dir().with_note(|| "While getting the current working directory")?;
    build_at(&root)
}

pub fn build_at(root: &Path) -> color_eyre::Result<()> {
    let ctx = BuildCtx::load_at(root);
    fs::create_dir_all(&ctx.output_dir)?;

    Pipeline::new(ctx).discover()?.parse()?.enhance().emit()
}

struct BuildCtx {
    current_dir: PathBuf,
    input_dir: PathBuf,
    output_dir: PathBuf,
}

impl BuildCtx {
    fn load_at(root: &Path) -> Self {
        let current_dir = root.to_path_buf();
        let input_dir = current_dir.join(INPUT_DIR);
        let output_dir = current_dir.join(OUTPUT_DIR);
        Self {
            current_dir,
            input_dir,
            output_dir,
        }
    }
}

fn source_kind(entry: &DirEntry) -> Option<SourceKind> {
    match entry.path().extension()?.to_str()? {
        "md" => Some(SourceKind::Markdown),
        "html" => Some(SourceKind::Html),
        _ => None,
    }
}

fn discover_sources(ctx: &BuildCtx) -> color_eyre::Result<Vec<PageSource>> {
    let (entries, errors): (Vec<DirEntry>, Vec<walkdir::Error>) = WalkDir::new(&ctx.input_dir)
        .sort_by_file_name()
        .into_iter()
        .partition_map(|r| match r {
            Ok(v) => Either::Left(v),
            Err(e) => Either::Right(e),
        });

    if !errors.is_empty() {
        return Err(eyre!(
            "Failed to open some directory entries: {errors:?}"
        ));
    }

    let (sources, errors): (Vec<PageSource>, Vec<(PathBuf, std::io::Error)>) = entries
        .into_iter()
        .filter(|e| e.file_type().is_file())
        .filter_map(|e| source_kind(&e).map(|kind| (e, kind)))
        .partition_map(|(e, kind)| {
            let rel = e
                .path()
                .strip_prefix(&ctx.input_dir)
                .map(Path::to_path_buf)
                .unwrap_or_else(|_| e.path().to_path_buf());
            match fs::read_to_string(e.path()) {
                Ok(content) => Either::Left(PageSource { rel, content, kind }),
                Err(err) => Either::Right((e.path().to_path_buf(), err)),
            }
        });

    if !errors.is_empty() {
        return Err(eyre!("Failed to open some files: {errors:?}"));
    }

    info!(pages = sources.len(), "discovered sources");
    Ok(sources)
}

/// Title for a Markdown page: its first `# ` heading, else the file stem
/// formatted the way breadcrumb segments are.
fn page_title(source: &PageSource) -> String {
    source
        .content
        .lines()
        .find_map(|line| line.strip_prefix("# "))
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .map(ToOwned::to_owned)
        .unwrap_or_else(|| {
            let stem = source
                .rel
                .file_stem()
                .map(|s| s.to_string_lossy().into_owned())
                .unwrap_or_default();
            format_segment(&stem)
        })
}

fn parse_sources(sources: Vec<PageSource>) -> color_eyre::Result<Vec<Page>> {
    sources
        .into_iter()
        .map(|source| {
            let rel_out = RelPath::new(source.rel.with_extension("html"))
                .ok_or_else(|| eyre!("Output path must be relative"))?;
            let html = match source.kind {
                SourceKind::Markdown => {
                    let title = page_title(&source);
                    let body = markdown::render(&source.content);
                    page_shell(&title, rel_out.as_path(), &body)
                }
                SourceKind::Html => source.content,
            };
            Ok(Page {
                rel_out,
                doc: Document::parse(&html),
            })
        })
        .collect()
}

/// URL path for a page, used for its breadcrumb trail.
fn url_path(rel_out: &RelPath) -> String {
    let joined = rel_out
        .as_path()
        .components()
        .map(|c| c.as_os_str().to_string_lossy())
        .join("/");
    format!("/{joined}")
}

fn enhance_page(page: &mut Page) {
    let path = url_path(&page.rel_out);
    debug!(page = %path, "enhancing");
    TocGenerator::new().generate(&mut page.doc);
    BreadcrumbGenerator::new().generate(&mut page.doc, &path);
    code::highlight_code_blocks(&mut page.doc);
    progress::apply_static_bars(&mut page.doc);
}

fn emit_pages(ctx: &BuildCtx, pages: &[Page]) -> color_eyre::Result<()> {
    pages
        .par_iter()
        .map(|page| {
            let out_path = ctx.output_dir.join(page.rel_out.as_path());
            if let Some(parent) = out_path.parent() {
                fs::create_dir_all(parent)?;
            }
            let root = page.doc.root();
            let html = format!("<!doctype html>\n{}", page.doc.inner_html(root));
            fs::write(out_path, html)
        })
        .collect::<Result<(), std::io::Error>>()?;

    emit_stylesheet(ctx)?;

    info!(pages = pages.len(), "emitted");
    Ok(())
}

// The pages link {prefix}style.css; the site stylesheet (if any) and the
// classed syntax highlighting theme both land there.
fn emit_stylesheet(ctx: &BuildCtx) -> color_eyre::Result<()> {
    let in_path = ctx.current_dir.join("style").with_extension("css");
    let mut stylesheet = match fs::read_to_string(&in_path) {
        Ok(css) => css,
        Err(_) => String::new(),
    };
    if !stylesheet.is_empty() && !stylesheet.ends_with('\n') {
        stylesheet.push('\n');
    }
    stylesheet.push_str(code::highlight_css());
    fs::write(ctx.output_dir.join("style.css"), stylesheet)?;
    Ok(())
}

trait PipelineStage {}

/// Pipeline typestate driver.
struct Pipeline<S: PipelineStage> {
    ctx: BuildCtx,
    state: S,
}

impl PipelineStage for () {}

struct Discovered(Vec<PageSource>);
impl PipelineStage for Discovered {}

struct Parsed(Vec<Page>);
impl PipelineStage for Parsed {}

struct Enhanced(Vec<Page>);
impl PipelineStage for Enhanced {}

impl Pipeline<()> {
    fn new(ctx: BuildCtx) -> Self {
        Self { ctx, state: () }
    }

    fn discover(self) -> color_eyre::Result<Pipeline<Discovered>> {
        let sources = discover_sources(&self.ctx)?;
        Ok(Pipeline {
            ctx: self.ctx,
            state: Discovered(sources),
        })
    }
}

impl Pipeline<Discovered> {
    fn parse(self) -> color_eyre::Result<Pipeline<Parsed>> {
        let pages = parse_sources(self.state.0)?;
        Ok(Pipeline {
            ctx: self.ctx,
            state: Parsed(pages),
        })
    }
}

impl Pipeline<Parsed> {
    fn enhance(self) -> Pipeline<Enhanced> {
        let mut pages = self.state.0;
        pages.par_iter_mut().for_each(enhance_page);
        Pipeline {
            ctx: self.ctx,
            state: Enhanced(pages),
        }
    }
}

impl Pipeline<Enhanced> {
    fn emit(self) -> color_eyre::Result<()> {
        emit_pages(&self.ctx, &self.state.0)
    }
}
