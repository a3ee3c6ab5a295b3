//! End-to-end integration tests over an in-memory article corpus.

use agrupar::prelude::*;

/// Six short articles covering three topics: covid vaccination, the
/// Israel-Palestine conflict, and the GameStop trading frenzy.
fn corpus() -> Vec<String> {
    vec![
        "The covid vaccination effort is underway. Pfizer, Moderna, and Janssen all produce \
         covid vaccines. Covid is dangerous and vaccination is recommended."
            .to_string(),
        "Vaccines have been shown to be safe and effective. Vaccination is recommended for all \
         adults. Vaccines are tested for quality. The vaccination program has reduced covid deaths."
            .to_string(),
        "Israel and Palestine are in dire conflict. Casualties in both Israel and Palestine have \
         been reported. The conflict has no end in sight."
            .to_string(),
        "The conflict between Israel and Palestine has escalated. Civilian casualties in Gaza \
         have been reported."
            .to_string(),
        "The GameStop trading frenzy has WallStreet on edge. The stock has shown extreme \
         volatility. GameStop has no comment."
            .to_string(),
        "GameStop stock volatility can be linked back to reddit activity.".to_string(),
    ]
}

fn stopwords() -> StopWordsFilter {
    StopWordsFilter::new(vec![
        "i", "may", "how", "some", "all", "more", "what", "so", "says", "said", "it", "its", "as",
        "the", "a", "an", "these", "their", "you", "is", "are", "and", "of", "for", "but", "to",
        "in", "or", "has", "have", "we", "not", "this", "on", "there", "he", "be", "that", "can",
        "from", "were", "been", "no", "both",
    ])
}

#[test]
fn pipeline_stages_compose() {
    let tokenizer = AlphaTokenizer::new(stopwords());
    let documents: Vec<Vec<String>> = corpus().iter().map(|d| tokenizer.clean(d)).collect();

    // Every token survived cleaning as lowercase alpha.
    for doc in &documents {
        assert!(!doc.is_empty());
        for token in doc {
            assert!(token.chars().all(|c| c.is_ascii_lowercase()));
        }
    }

    let mut vectorizer = TfIdfVectorizer::new();
    vectorizer.fit(&documents);
    assert!(vectorizer.is_fitted());

    let embeddings = vectorizer.transform(&documents).expect("consistent rows");
    assert_eq!(embeddings.shape(), (6, vectorizer.dimension()));

    let mut kmeans = KMeans::new(3)
        .with_iterations(100)
        .with_random_state(9);
    kmeans.fit(&embeddings).expect("fit succeeds");

    let labels = kmeans.predict(&embeddings);
    assert_eq!(labels.len(), 6);
    for &label in &labels {
        assert!(label < 3);
    }
}

#[test]
fn topic_terms_come_from_the_vocabulary() {
    let tokenizer = AlphaTokenizer::new(stopwords());
    let documents: Vec<Vec<String>> = corpus().iter().map(|d| tokenizer.clean(d)).collect();

    let mut vectorizer = TfIdfVectorizer::new();
    vectorizer.fit(&documents);
    let embeddings = vectorizer.transform(&documents).expect("consistent rows");

    let mut kmeans = KMeans::new(3).with_iterations(50).with_random_state(9);
    kmeans.fit(&embeddings).expect("fit succeeds");

    let centroids = kmeans.centroids();
    for c in 0..kmeans.k() {
        let top = top_terms(&centroids.row(c), vectorizer.vocabulary(), 6)
            .expect("aligned dimensions");
        assert!(top.len() <= 6);
        for entry in &top {
            assert!(vectorizer.vocabulary().contains(&entry.term));
            assert!(entry.weight >= 0.0);
        }
        // Descending weight order.
        for pair in top.windows(2) {
            assert!(pair[0].weight >= pair[1].weight);
        }
    }
}

#[test]
fn out_of_sample_inference_lands_with_its_topic() {
    let tokenizer = AlphaTokenizer::new(stopwords());
    let documents: Vec<Vec<String>> = corpus().iter().map(|d| tokenizer.clean(d)).collect();

    let mut vectorizer = TfIdfVectorizer::new();
    vectorizer.fit(&documents);
    let embeddings = vectorizer.transform(&documents).expect("consistent rows");

    // Try a handful of seeds and keep one that separates the vaccine pair
    // from the stock pair; random initialization can collapse clusters.
    let mut checked = false;
    for seed in 0..20 {
        let mut kmeans = KMeans::new(3).with_iterations(100).with_random_state(seed);
        kmeans.fit(&embeddings).expect("fit succeeds");
        let labels = kmeans.predict(&embeddings);
        if labels[0] == labels[1] && labels[4] == labels[5] && labels[0] != labels[4] {
            let novel = "the covid vaccination effort is underway. pfizer, moderna, and \
                         Janssen are all producing covid vaccines";
            let embedding = vectorizer.embed(&tokenizer.clean(novel));
            assert_eq!(kmeans.infer(&embedding), labels[0]);
            checked = true;
            break;
        }
    }
    assert!(checked, "no seed separated the vaccine and stock topics");
}

#[test]
fn discovery_driver_reports_all_clusters() {
    let discovery = TopicDiscovery::new(3)
        .with_stop_words(stopwords())
        .with_iterations(100)
        .with_top_terms(6)
        .with_random_state(9);

    let report = discovery.discover(&corpus()).expect("discovery succeeds");
    assert_eq!(report.assignments.len(), 6);
    assert_eq!(report.clusters.len(), 3);
}

#[test]
fn html_corpus_round_trip() {
    let pages: Vec<String> = corpus()
        .iter()
        .map(|text| format!("<html><body><p class=\"story\">{text}</p></body></html>"))
        .collect();
    let stripped: Vec<String> = pages.iter().map(|p| strip_tags(p)).collect();
    assert_eq!(stripped, corpus());

    let discovery = TopicDiscovery::new(2)
        .with_stop_words(stopwords())
        .with_iterations(25)
        .with_random_state(4);
    let report = discovery.discover(&stripped).expect("discovery succeeds");
    assert_eq!(report.assignments.len(), 6);
}
