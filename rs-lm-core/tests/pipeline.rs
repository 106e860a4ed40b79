use std::fs;
use std::path::Path;

use rs_lm_core::LmError;
use rs_lm_core::distribution::{
	GoodTuringDistribution, LaplaceDistribution, MaximumLikelihoodDistribution, ProbabilityDistribution,
};
use rs_lm_core::model::{ModelConfig, NGramModel};
use rs_lm_core::perplexity::{log_perplexity, log_perplexity_from_file};

const TRAIN: &str = "\
the cat sat on the mat .
the dog sat on the mat .
the cat ate the fish .
a dog ate the bone .
the cat sat on the rug .
";

const HELD_OUT: &str = "\
the dog sat on the rug .
a cat ate the fish .
";

fn init_logger() {
	let _ = env_logger::builder().is_test(true).try_init();
}

fn write(dir: &Path, name: &str, content: &str) -> std::path::PathBuf {
	let path = dir.join(name);
	fs::write(&path, content).unwrap();
	path
}

#[test]
fn train_smooth_and_evaluate() {
	init_logger();
	let dir = tempfile::tempdir().unwrap();
	let train = write(dir.path(), "train.txt", TRAIN);
	let held_out = write(dir.path(), "held_out.txt", HELD_OUT);

	let config = ModelConfig::default();
	let model = NGramModel::from_file(&train, config.clone()).unwrap();
	assert_eq!(model.frequency("_START_ _START_ the"), 4);
	assert_eq!(model.frequency("sat on the"), 3);
	assert_eq!(model.subgram_frequency("_START_ _START_"), 5);

	let vocabulary = model.subgrams().len();
	let laplace = LaplaceDistribution::build(model.ngrams(), model.subgrams().clone(), vocabulary).unwrap();
	let good_turing = GoodTuringDistribution::build(model.ngrams()).unwrap();

	let laplace_train = log_perplexity_from_file(&train, &laplace, &config).unwrap();
	let laplace_held_out = log_perplexity_from_file(&held_out, &laplace, &config).unwrap();
	assert!(laplace_train.is_finite() && laplace_held_out.is_finite());
	assert!(laplace_train < laplace_held_out);

	let good_turing_held_out = log_perplexity_from_file(&held_out, &good_turing, &config).unwrap();
	assert!(good_turing_held_out.is_finite() && good_turing_held_out > 0.0);
}

#[test]
fn mle_fails_on_uncovered_text_only() {
	let config = ModelConfig::new(2).unwrap();
	let mut model = NGramModel::new(config.clone()).unwrap();
	model.accumulate(TRAIN.lines());
	let mle = MaximumLikelihoodDistribution::build(model.ngrams(), model.subgrams()).unwrap();

	assert!(log_perplexity(["the cat sat on the mat ."], &mle, &config).is_ok());
	let err = log_perplexity(["the bone sat ."], &mle, &config).unwrap_err();
	assert!(matches!(err, LmError::ZeroProbability(ref gram) if gram == "bone sat"));
}

#[test]
fn stored_tables_give_identical_distributions() {
	let dir = tempfile::tempdir().unwrap();
	let config = ModelConfig::default();
	let mut model = NGramModel::new(config.clone()).unwrap();
	model.accumulate(TRAIN.lines());
	model.store(dir.path()).unwrap();

	let loaded = NGramModel::load(dir.path(), config).unwrap();
	let original = GoodTuringDistribution::build(model.ngrams()).unwrap();
	let reloaded = GoodTuringDistribution::build(loaded.ngrams()).unwrap();
	for gram in model.ngrams().grams() {
		assert_eq!(original.probability(gram).to_bits(), reloaded.probability(gram).to_bits());
	}
	assert_eq!(original.probability("never seen gram"), original.unseen_mass());
}

#[test]
fn missing_corpus_is_an_io_error() {
	let dir = tempfile::tempdir().unwrap();
	let result = NGramModel::from_file(dir.path().join("absent.txt"), ModelConfig::default());
	assert!(matches!(result, Err(LmError::Io(_))));
}
