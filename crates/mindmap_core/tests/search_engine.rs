use mindmap_core::{search, MatchField, MindMapNode, NodeContent, NodeKind, MAX_SEARCH_RESULTS};

fn subtopic(id: &str, title: &str, description: &str) -> MindMapNode {
    MindMapNode::new(id, NodeKind::Subtopic, title, description)
}

fn domain(id: &str, title: &str, description: &str) -> MindMapNode {
    MindMapNode::new(id, NodeKind::Domain, title, description)
}

fn root_with(domains: Vec<MindMapNode>) -> MindMapNode {
    domains.into_iter().fold(
        MindMapNode::new("root", NodeKind::Root, "Sustainability Root", "sustain everything"),
        MindMapNode::with_child,
    )
}

fn hit_ids(query: &str, root: &MindMapNode) -> Vec<String> {
    search(query, Some(root))
        .into_iter()
        .map(|hit| hit.node.id.clone())
        .collect()
}

#[test]
fn short_queries_return_nothing() {
    let root = root_with(vec![domain("d", "A", "a").with_child(subtopic("s", "a", ""))]);
    assert!(search("a", Some(&root)).is_empty());
    assert!(search("  a  ", Some(&root)).is_empty());
    assert!(search("", Some(&root)).is_empty());
}

#[test]
fn missing_root_returns_nothing() {
    assert!(search("anything", None).is_empty());
}

#[test]
fn root_node_is_never_a_hit() {
    let root = root_with(vec![domain("d", "Operations", "")]);
    assert!(hit_ids("sustain", &root).is_empty());
}

#[test]
fn search_is_case_insensitive() {
    let root = root_with(vec![
        domain("d", "Energy", "").with_child(subtopic("s", "Sustainability", "")),
    ]);

    let upper = search("SUSTAIN", Some(&root));
    let lower = search("sustain", Some(&root));
    assert_eq!(upper.len(), 1);
    assert_eq!(upper[0].score, lower[0].score);
    assert_eq!(upper[0].matched_fields, lower[0].matched_fields);
    assert_eq!(upper[0].matched_fields, vec![MatchField::TitleStart]);
}

#[test]
fn exact_outranks_prefix_outranks_substring_outranks_fuzzy() {
    let root = root_with(vec![domain("d", "Portfolio", "").with_child(
        subtopic("fuzzy", "Automation Index", ""),
    )
    .with_child(subtopic("substring", "Global AI", ""))
    .with_child(subtopic("prefix", "AI Strategy", ""))
    .with_child(subtopic("exact", "Ai", ""))]);

    let hits = search("ai", Some(&root));
    let ids = hits.iter().map(|hit| hit.node.id.as_str()).collect::<Vec<_>>();
    assert_eq!(ids, vec!["exact", "prefix", "substring", "fuzzy"]);

    let scores = hits.iter().map(|hit| hit.score).collect::<Vec<_>>();
    assert_eq!(scores, vec![100.0, 75.0, 50.0, 30.0]);
    assert_eq!(hits[0].matched_fields, vec![MatchField::TitleExact]);
    assert_eq!(hits[1].matched_fields, vec![MatchField::TitleStart]);
    assert_eq!(hits[2].matched_fields, vec![MatchField::Title]);
    assert_eq!(hits[3].matched_fields, vec![MatchField::TitleFuzzy]);
}

#[test]
fn domain_score_is_boosted_by_exactly_one_point_two() {
    let root = root_with(vec![
        domain("dom", "Robotics Lab", "").with_child(subtopic("sub", "Robotics Lab", "")),
    ]);

    let hits = search("robotics", Some(&root));
    assert_eq!(hits.len(), 2);
    assert_eq!(hits[0].node.id, "dom");
    assert_eq!(hits[1].node.id, "sub");
    assert!((hits[0].score - hits[1].score * 1.2).abs() < 1e-9);
    assert!((hits[0].score - 90.0).abs() < 1e-9);
}

#[test]
fn description_and_content_add_independent_scores() {
    let content = NodeContent {
        overview: "Edge deployment".to_string(),
        key_features: vec!["quantized vision models".to_string()],
        benefits: Vec::new(),
        use_cases: None,
        technologies: Some(vec!["ONNX".to_string()]),
    };
    let root = root_with(vec![domain("d", "Platform", "").with_child(
        subtopic("s", "Vision Kit", "Camera vision pipelines").with_content(content),
    )]);

    let hits = search("vision", Some(&root));
    assert_eq!(hits.len(), 1);
    assert_eq!(
        hits[0].matched_fields,
        vec![
            MatchField::TitleStart,
            MatchField::Description,
            MatchField::Content
        ]
    );
    assert_eq!(hits[0].score, 75.0 + 25.0 + 10.0);

    let tech_hits = search("onnx", Some(&root));
    assert_eq!(tech_hits.len(), 1);
    assert_eq!(tech_hits[0].matched_fields, vec![MatchField::Content]);
    assert_eq!(tech_hits[0].score, 10.0);
}

#[test]
fn description_fuzzy_scores_when_substring_misses() {
    let root = root_with(vec![
        domain("d", "Platform", "").with_child(subtopic("s", "Kit", "natural language")),
    ]);

    let hits = search("nlg", Some(&root));
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].matched_fields, vec![MatchField::DescriptionFuzzy]);
    assert_eq!(hits[0].score, 15.0);
}

#[test]
fn results_are_capped_at_ten() {
    let mut parent = domain("d", "Catalog", "");
    for index in 0..15 {
        parent = parent.with_child(subtopic(&format!("s{index}"), &format!("Model {index}"), ""));
    }
    let root = root_with(vec![parent]);

    let hits = search("model", Some(&root));
    assert_eq!(hits.len(), MAX_SEARCH_RESULTS);
}

#[test]
fn equal_scores_keep_tree_order() {
    let root = root_with(vec![
        domain("d1", "Group One", "")
            .with_child(subtopic("a", "Data Lake", ""))
            .with_child(subtopic("b", "Data Mesh", "")),
        domain("d2", "Group Two", "").with_child(subtopic("c", "Data Vault", "")),
    ]);

    assert_eq!(hit_ids("data", &root), vec!["a", "b", "c"]);
}

#[test]
fn highlighted_title_marks_literal_metacharacter_queries() {
    let root = root_with(vec![domain("d", "Languages", "").with_child(subtopic(
        "cpp",
        "Modern C++ and c++20",
        "",
    ))]);

    let hits = search("c++", Some(&root));
    assert_eq!(hits.len(), 1);
    assert_eq!(
        hits[0].highlighted_title,
        "Modern <mark>C++</mark> and <mark>c++</mark>20"
    );
}

#[test]
fn highlighted_title_is_unchanged_for_fuzzy_hits() {
    let root = root_with(vec![
        domain("d", "Portfolio", "").with_child(subtopic("s", "Automation Index", "")),
    ]);

    let hits = search("ai", Some(&root));
    assert_eq!(hits[0].highlighted_title, "Automation Index");
}

#[test]
fn unmatched_nodes_are_dropped() {
    let root = root_with(vec![
        domain("d", "Finance", "Money").with_child(subtopic("s", "Ledger", "Books")),
    ]);
    assert!(hit_ids("zz", &root).is_empty());
}
