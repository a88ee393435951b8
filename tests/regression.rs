use libtest_mimic::{Arguments, Failed, Trial};
use std::path::{Path, PathBuf};

use collinear::{parse_points, FastCollinear};

fn main() {
    let args = Arguments::from_args();
    let tests = regression_tests();

    libtest_mimic::run(&args, tests).exit();
}

fn regression_tests() -> Vec<Trial> {
    let ws = std::env::var("CARGO_MANIFEST_DIR").unwrap();
    let file_paths = glob::glob(&format!("{ws}/tests/regression/**/*.txt")).unwrap();

    file_paths
        .into_iter()
        .map(|p| {
            let p = p.unwrap();
            let name = input_path_base(&p).display().to_string();
            Trial::test(name, || run_regression_test(p))
        })
        .collect()
}

fn input_path_base(input_path: &Path) -> &Path {
    let ws = std::env::var("CARGO_MANIFEST_DIR").unwrap();
    let base = format!("{ws}/tests/regression");
    input_path.strip_prefix(base).unwrap()
}

// Each `foo.txt` point set is paired with `foo.expected`, which holds the
// listing followed by the segment count, as printed by the demo.
fn run_regression_test(path: PathBuf) -> Result<(), Failed> {
    let input = std::fs::read_to_string(&path)?;
    let points = parse_points(&input)?;
    let found = FastCollinear::new(&points);

    let actual = format!("{found}{}\n", found.number_of_segments());
    let expected = std::fs::read_to_string(path.with_extension("expected"))?;
    if actual.trim_end() == expected.trim_end() {
        Ok(())
    } else {
        Err(format!("expected:\n{expected}\nactual:\n{actual}").into())
    }
}
