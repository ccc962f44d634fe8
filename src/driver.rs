// Table generation pipeline
//
// Writes the functions CSV, then the three primary tables, then the four
// summary tables. Any failure aborts the run.

use crate::analysis::{count_programs, count_source_categories, CategoryCounts, FunctionExtractor};
use crate::config::{Config, FunctionsConfig};
use crate::error::{Error, Result};
use crate::output::{table_id, write_functions_csv, CsvTable, SummaryTable, TableSpec, TemplateEngine};
use std::fs;
use std::path::{Path, PathBuf};

/// Name of the intermediate function listing
pub const FUNCTIONS_CSV: &str = "functions.csv";

/// Sources table: only the description is left unsorted
pub const SOURCES_TABLE: TableSpec = TableSpec {
    unsortable_columns: 1,
    break_commas_column: None,
    page_length: None,
};

/// Programs table: description, example file and input flag are unsorted
pub const PROGRAMS_TABLE: TableSpec = TableSpec {
    unsortable_columns: 3,
    break_commas_column: None,
    page_length: None,
};

/// Column of functions.csv holding the argument list
const ARGUMENTS_COLUMN: usize = 4;

/// The four input files of a run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Inputs {
    pub sources: PathBuf,
    pub programs: PathBuf,
    pub prototypes: PathBuf,
    pub tags: PathBuf,
}

impl Inputs {
    /// Resolve the inputs, locating the prototype listing and tag index
    /// inside the source directory. Every path must exist.
    pub fn locate(
        sources: &Path,
        programs: &Path,
        source_dir: &Path,
        functions: &FunctionsConfig,
    ) -> Result<Self> {
        for path in [sources, programs, source_dir] {
            ensure_exists(path)?;
        }

        let inputs = Self {
            sources: sources.to_path_buf(),
            programs: programs.to_path_buf(),
            prototypes: source_dir.join(&functions.prototypes_file),
            tags: source_dir.join(&functions.tags_file),
        };
        ensure_exists(&inputs.prototypes)?;
        ensure_exists(&inputs.tags)?;

        Ok(inputs)
    }
}

fn ensure_exists(path: &Path) -> Result<()> {
    if path.exists() {
        Ok(())
    } else {
        Err(Error::PathNotFound(path.to_path_buf()))
    }
}

/// Runs the whole generation
pub struct Driver {
    config: Config,
    engine: TemplateEngine,
    extractor: FunctionExtractor,
}

impl Driver {
    /// Create a driver for the given configuration
    pub fn new(config: Config) -> Result<Self> {
        let engine = TemplateEngine::new()?;
        let extractor = FunctionExtractor::new(&config.functions.export_marker)?;

        Ok(Self {
            config,
            engine,
            extractor,
        })
    }

    /// Generate every output file
    pub fn run(&self, inputs: &Inputs) -> Result<GenerationReport> {
        let mut report = GenerationReport::default();

        if let Some(dir) = &self.config.output.directory {
            fs::create_dir_all(dir)?;
        }

        let functions = self
            .extractor
            .extract(&inputs.prototypes, &inputs.tags, &inputs.sources)?;

        let functions_csv = self.functions_csv_path();
        announce(&functions_csv);
        write_functions_csv(&functions, &functions_csv)?;
        report.files.push(functions_csv.clone());

        let functions_table = TableSpec {
            unsortable_columns: 2,
            break_commas_column: Some(ARGUMENTS_COLUMN),
            page_length: Some(self.config.functions.page_length),
        };
        self.write_csv_table(&inputs.sources, &SOURCES_TABLE, &mut report)?;
        self.write_csv_table(&inputs.programs, &PROGRAMS_TABLE, &mut report)?;
        self.write_csv_table(&functions_csv, &functions_table, &mut report)?;

        let source_counts = count_source_categories(&inputs.sources)?;
        self.write_summary(&inputs.sources, "-summary", "Category", "Categories", &source_counts, &mut report)?;

        let program_counts = count_programs(&inputs.programs)?;
        self.write_summary(&inputs.programs, "-typesummary", "Type", "Types", &program_counts.types, &mut report)?;
        self.write_summary(
            &inputs.programs,
            "-categorysummary",
            "Category",
            "Categories",
            &program_counts.categories,
            &mut report,
        )?;

        self.write_summary(
            &functions_csv,
            "-summary",
            "Category",
            "Categories",
            &functions.category_counts,
            &mut report,
        )?;

        report.functions = functions.len();
        Ok(report)
    }

    /// Render a CSV file as a table next to it (or in the output directory)
    fn write_csv_table(&self, csv: &Path, spec: &TableSpec, report: &mut GenerationReport) -> Result<()> {
        let path = self.html_path(csv, "");
        announce(&path);

        let html = CsvTable::load(csv, spec)?.render(&self.engine)?;
        self.write_html(&path, &html)?;
        report.files.push(path);
        Ok(())
    }

    fn write_summary(
        &self,
        input: &Path,
        suffix: &str,
        heading: &str,
        plural: &str,
        counts: &CategoryCounts,
        report: &mut GenerationReport,
    ) -> Result<()> {
        let path = self.html_path(input, suffix);
        announce(&path);

        let id = format!("{}{}", table_id(input), suffix);
        let html = SummaryTable::new(&id, heading, plural, counts).render(&self.engine)?;
        self.write_html(&path, &html)?;
        report.files.push(path);
        Ok(())
    }

    fn write_html(&self, path: &Path, fragment: &str) -> Result<()> {
        if self.config.output.standalone {
            let page = self.engine.render_page(fragment, &self.config.page)?;
            fs::write(path, page)?;
        } else {
            fs::write(path, fragment)?;
        }
        Ok(())
    }

    /// `<stem><suffix>.html`, beside the input unless an output directory is set
    fn html_path(&self, input: &Path, suffix: &str) -> PathBuf {
        let name = format!("{}{}.html", table_id(input), suffix);
        match &self.config.output.directory {
            Some(dir) => dir.join(name),
            None => input.with_file_name(name),
        }
    }

    fn functions_csv_path(&self) -> PathBuf {
        match &self.config.output.directory {
            Some(dir) => dir.join(FUNCTIONS_CSV),
            None => PathBuf::from(FUNCTIONS_CSV),
        }
    }
}

fn announce(path: &Path) {
    println!("Writing: {}", path.display());
}

/// Report of what was generated
#[derive(Debug, Default)]
pub struct GenerationReport {
    pub files: Vec<PathBuf>,
    pub functions: usize,
}

impl GenerationReport {
    pub fn summary(&self) -> String {
        format!(
            "Generated {} files ({} functions)",
            self.files.len(),
            self.functions
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    struct Project {
        dir: TempDir,
        inputs: Inputs,
    }

    fn project() -> Project {
        let dir = TempDir::new().unwrap();
        let src = dir.path().join("src");
        fs::create_dir(&src).unwrap();

        fs::write(
            dir.path().join("srcs.csv"),
            "Filename,Category,Description\na.c,Core,desc\nb.c,Stub functions,desc\n",
        )
        .unwrap();
        fs::write(
            dir.path().join("progs.csv"),
            "Filename,Type,Category,Description,ExampleFile,NeedsInput\n\
             a_reg.c,Regression,Core,Tests a,,No\n",
        )
        .unwrap();
        fs::write(src.join("tags"), "foo\ta.c\t10\tf\nbar\tb.c\t20\tf\n").unwrap();
        fs::write(
            src.join("leptprotos.h"),
            "LEPT_DLL extern int foo(int x);\nLEPT_DLL extern void bar(void);\n",
        )
        .unwrap();

        let inputs = Inputs::locate(
            &dir.path().join("srcs.csv"),
            &dir.path().join("progs.csv"),
            &src,
            &FunctionsConfig::default(),
        )
        .unwrap();

        Project { dir, inputs }
    }

    fn driver(out: &Path, standalone: bool) -> Driver {
        let mut config = Config::default();
        config.merge_cli(Some(out.to_path_buf()), standalone);
        Driver::new(config).unwrap()
    }

    #[test]
    fn test_locate_missing_tags() {
        let p = project();
        fs::remove_file(p.dir.path().join("src/tags")).unwrap();

        let err = Inputs::locate(
            &p.inputs.sources,
            &p.inputs.programs,
            &p.dir.path().join("src"),
            &FunctionsConfig::default(),
        )
        .unwrap_err();
        assert!(matches!(err, Error::PathNotFound(path) if path.ends_with("tags")));
    }

    #[test]
    fn test_run_writes_every_output() {
        let p = project();
        let out = p.dir.path().join("out");
        let report = driver(&out, false).run(&p.inputs).unwrap();

        let names: Vec<String> = report
            .files
            .iter()
            .map(|f| f.file_name().unwrap().to_string_lossy().into_owned())
            .collect();
        assert_eq!(
            names,
            vec![
                "functions.csv",
                "srcs.html",
                "progs.html",
                "functions.html",
                "srcs-summary.html",
                "progs-typesummary.html",
                "progs-categorysummary.html",
                "functions-summary.html",
            ]
        );
        for file in &report.files {
            assert!(file.starts_with(&out));
            assert!(file.exists(), "{} missing", file.display());
        }
        assert_eq!(report.functions, 1);
        assert_eq!(report.summary(), "Generated 8 files (1 functions)");
    }

    #[test]
    fn test_run_excludes_stub_functions() {
        let p = project();
        let out = p.dir.path().join("out");
        driver(&out, false).run(&p.inputs).unwrap();

        let csv = fs::read_to_string(out.join("functions.csv")).unwrap();
        assert_eq!(
            csv,
            "Filename,Category,Function,Return Type,Arguments\na.c,Core,foo,int,int x\n"
        );

        let summary = fs::read_to_string(out.join("functions-summary.html")).unwrap();
        assert!(summary.contains("<td>1 Categories</td>"));
        assert!(!summary.contains("Stub"));
    }

    #[test]
    fn test_fragments_versus_standalone() {
        let p = project();
        let fragment_dir = p.dir.path().join("fragments");
        let page_dir = p.dir.path().join("pages");
        driver(&fragment_dir, false).run(&p.inputs).unwrap();
        driver(&page_dir, true).run(&p.inputs).unwrap();

        let fragment = fs::read_to_string(fragment_dir.join("srcs.html")).unwrap();
        let page = fs::read_to_string(page_dir.join("srcs.html")).unwrap();
        assert!(!fragment.contains("<html>"));
        assert!(page.starts_with("<html>"));
        assert!(page.contains(fragment.as_str()));
    }

    #[test]
    fn test_default_layout_sits_beside_inputs() {
        let p = project();
        let config = Config::default();
        let driver = Driver::new(config).unwrap();

        assert_eq!(
            driver.html_path(&p.inputs.sources, "-summary"),
            p.dir.path().join("srcs-summary.html")
        );
        assert_eq!(driver.functions_csv_path(), PathBuf::from("functions.csv"));
        assert_eq!(
            driver.html_path(Path::new("functions.csv"), ""),
            PathBuf::from("functions.html")
        );
    }

    #[test]
    fn test_missing_tag_aborts_before_writing() {
        let p = project();
        fs::write(
            p.dir.path().join("src/leptprotos.h"),
            "LEPT_DLL extern int foo(int x);\nLEPT_DLL extern int ghost(void);\n",
        )
        .unwrap();
        let out = p.dir.path().join("out");

        let err = driver(&out, false).run(&p.inputs).unwrap_err();
        assert!(matches!(err, Error::MissingTag { .. }));
        assert!(!out.join("functions.csv").exists());
    }
}
