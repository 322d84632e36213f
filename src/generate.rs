use std::fs::{self, File};
use std::io::BufWriter;
use std::path::{Path, PathBuf};
use std::thread;

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg64;
use tracing::{debug, info};

use crate::error::{Error, Result};
use crate::op::{Descriptor, Op, DESCRIPTORS};
use crate::vector::write_vectors;

/// Vectors written per file unless configured otherwise.
pub const NUM_TESTS: usize = 1000;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub out_dir: PathBuf,
    pub count: usize,
    /// `None` seeds from OS entropy.
    pub seed: Option<u64>,
    pub ops: Vec<Op>,
    pub parallel: bool,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            out_dir: PathBuf::from("."),
            count: NUM_TESTS,
            seed: None,
            ops: Op::ALL.to_vec(),
            parallel: false,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Report {
    pub op: Op,
    pub path: PathBuf,
    pub count: usize,
}

/// Creates (or truncates) `dir/<file name>` and fills it with `count`
/// vectors for `desc`.
pub fn generate_file<R: Rng + ?Sized>(
    rng: &mut R,
    desc: &Descriptor,
    dir: &Path,
    count: usize,
) -> Result<Report> {
    let path = dir.join(desc.file_name);

    let file = File::create(&path).map_err(|source| Error::Io {
        path: path.clone(),
        source,
    })?;

    write_vectors(rng, desc, count, BufWriter::new(file)).map_err(|e| e.at(&path))?;

    info!(op = %desc.op, path = %path.display(), count, "wrote vectors");

    Ok(Report {
        op: desc.op,
        path,
        count,
    })
}

fn split(master: &mut Pcg64) -> Pcg64 {
    Pcg64::new(master.gen(), master.gen())
}

/// Generates one file per configured operation.
///
/// Every operation in the table gets its own generator, split from the
/// master in table order, so a seeded run writes the same files however
/// the operations are selected or scheduled.
pub fn run(config: &Config) -> Result<Vec<Report>> {
    debug!(?config, "starting generation");

    fs::create_dir_all(&config.out_dir).map_err(|source| Error::Io {
        path: config.out_dir.clone(),
        source,
    })?;

    let mut master = match config.seed {
        Some(seed) => crate::rng(seed),
        None => Pcg64::from_entropy(),
    };

    let jobs = DESCRIPTORS
        .iter()
        .map(|desc| (desc, split(&mut master)))
        .filter(|(desc, _)| config.ops.contains(&desc.op))
        .collect::<Vec<_>>();

    let dir = config.out_dir.as_path();
    let count = config.count;

    if !config.parallel {
        return jobs
            .into_iter()
            .map(|(desc, mut rng)| generate_file(&mut rng, desc, dir, count))
            .collect();
    }

    thread::scope(|s| {
        let handles = jobs
            .into_iter()
            .map(|(desc, mut rng)| s.spawn(move || generate_file(&mut rng, desc, dir, count)))
            .collect::<Vec<_>>();

        handles
            .into_iter()
            .map(|h| h.join().unwrap_or_else(|e| std::panic::resume_unwind(e)))
            .collect()
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_dir(name: &str) -> PathBuf {
        let dir = std::env::temp_dir()
            .join(format!("bignum-vectors-{}-{name}", std::process::id()));
        let _ = fs::remove_dir_all(&dir);
        dir
    }

    #[test]
    fn default_config_covers_everything() {
        let config = Config::default();
        assert_eq!(config.count, 1000);
        assert_eq!(config.ops, Op::ALL);
        assert_eq!(config.seed, None);
        assert!(!config.parallel);
    }

    #[test]
    fn runs_in_table_order() {
        let dir = temp_dir("order");
        let config = Config {
            out_dir: dir.clone(),
            count: 3,
            seed: Some(11),
            ..Config::default()
        };

        let reports = run(&config).unwrap();
        let ops = reports.iter().map(|r| r.op).collect::<Vec<_>>();
        assert_eq!(ops, Op::ALL);

        for r in &reports {
            assert_eq!(r.path, dir.join(r.op.descriptor().file_name));
            assert_eq!(r.count, 3);
        }

        fs::remove_dir_all(dir).unwrap();
    }

    #[test]
    fn truncates_existing_files() {
        let dir = temp_dir("truncate");
        fs::create_dir_all(&dir).unwrap();

        let path = dir.join("addition.data");
        fs::write(&path, "stale\n".repeat(5000)).unwrap();

        let mut rng = crate::rng(12);
        generate_file(&mut rng, Op::Add.descriptor(), &dir, 2).unwrap();

        let text = fs::read_to_string(&path).unwrap();
        assert_eq!(text.lines().count(), 2);
        assert!(!text.contains("stale"));

        fs::remove_dir_all(dir).unwrap();
    }

    #[test]
    fn reports_unwritable_paths() {
        let dir = temp_dir("missing").join("not").join("here");

        let mut rng = crate::rng(13);
        let err = generate_file(&mut rng, Op::Mul.descriptor(), &dir, 1).unwrap_err();

        match err {
            Error::Io { path, .. } => assert_eq!(path, dir.join("multiplication.data")),
            e => panic!("unexpected error: {e}"),
        }
    }

    #[test]
    fn selection_does_not_change_seeded_output() {
        let all = temp_dir("select-all");
        let one = temp_dir("select-one");

        run(&Config {
            out_dir: all.clone(),
            count: 20,
            seed: Some(14),
            ..Config::default()
        })
        .unwrap();

        run(&Config {
            out_dir: one.clone(),
            count: 20,
            seed: Some(14),
            ops: vec![Op::BitXor],
            ..Config::default()
        })
        .unwrap();

        let expected = fs::read(all.join("bit_xor.data")).unwrap();
        assert_eq!(fs::read(one.join("bit_xor.data")).unwrap(), expected);
        assert!(!one.join("addition.data").exists());

        fs::remove_dir_all(all).unwrap();
        fs::remove_dir_all(one).unwrap();
    }
}
