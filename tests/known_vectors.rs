use textsim::{compare, compare_named, Metric, MetricConfig};

const S1: &str = "public String f(String s)";
const S2: &str = "public String func(String s)";

fn score(first: &str, second: &str, metric: &str) -> f64 {
    compare_named(first, second, metric).expect("comparison succeeds")
}

fn normalized(first: &str, second: &str, metric: &str) -> f64 {
    let cfg = MetricConfig::new(metric.parse::<Metric>().unwrap()).with_normalize(true);
    compare(first, second, &cfg).expect("comparison succeeds")
}

fn assert_close(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < 1e-12,
        "expected {expected}, got {actual}"
    );
}

#[test]
fn levenshtein_vectors() {
    assert_eq!(score("Hello", "Hello", "levenshtein"), 1.0);
    assert_close(score("Hello", "Ola", "levenshtein"), 0.2);
    assert_eq!(score("paul", "pual", "levenshtein"), 0.5);
    assert_eq!(score("2007", "2008", "levenshtein"), 0.75);
    assert_eq!(score("ab", "", "levenshtein"), 0.0);
    assert_eq!(score("", "", "levenshtein"), 1.0);
}

#[test]
fn transposition_aware_vectors() {
    assert_close(score("Hello", "Hlelo", "damerau_levenshtein"), 0.8);
    assert_eq!(score("paul", "pual", "optimal_alignment"), 0.75);
}

#[test]
fn lcs_vectors() {
    assert_close(
        score("ABCDEFG", "ABCDEFHJKL", "longest_common_subsequence"),
        0.6,
    );
    assert_eq!(score("", "", "longest_common_subsequence"), 1.0);
}

#[test]
fn four_gram_set_vectors() {
    assert_eq!(score("Hallo Du", "Hallo Sie", "ngram_jaccard"), 3.0 / 8.0);
    assert_eq!(score("Hallo Welt", "Hallo Wlt", "ngram_jaccard"), 4.0 / 9.0);
    assert_eq!(score(S1, S2, "ngram_jaccard"), 15.0 / 24.0);
    assert_eq!(score(S1, S2, "ngram_dice"), 30.0 / 39.0);
    assert_eq!(score(S1, S2, "ngram_overlap"), 15.0 / 18.0);
}

#[test]
fn winnowing_vector() {
    assert_eq!(
        score("public Node(int n)", "public Node(int v)", "winnowing_ngram_dice"),
        1.0
    );
    assert_eq!(
        normalized("public Node(int n)", "public Node(int v)", "winnowing_ngram_dice"),
        1.0
    );
}

#[test]
fn normalized_profile_vectors() {
    assert_close(
        normalized(S1, S2, "ngram_cosine_tf"),
        22.0 / (5.0 * 28f64.sqrt()),
    );
    assert_close(
        normalized(S1, S2, "ngram_cosine_bool"),
        13.0 / (4.0 * 19f64.sqrt()),
    );
    assert_eq!(normalized("hallowe", "hallowo", "ngram_manhattan"), 0.75);
}

#[test]
fn normalized_equality() {
    assert_eq!(score("int a;", "int  a", "equal"), 0.0);
    assert_eq!(normalized("int a;", "INT  a", "equal"), 1.0);
}
