use behavior_tree::builder::{fallback, is_running, not, parallel, sequence, skill, truth};
use behavior_tree::{
    Behavior, Btree, DecKind, DummySkills, Forest, NodeKind, Status, TreeConfig, TreeError,
    count_skills, count_skills_checked, depth, forest, is_normal, node_count, normalize,
    normalize_checked,
};

type Tree = Btree<String>;

fn s(name: &str) -> Tree {
    skill(name.to_owned())
}

#[test]
fn single_child_sequence_becomes_its_skill() {
    let tree = sequence("s", forest![s("a")]);

    assert_eq!(count_skills(&tree), 1);
    let normalized = normalize(&tree);
    assert_eq!(normalized, s("a"));
    assert_eq!(count_skills(&normalized), 1);
}

#[test]
fn double_negation_becomes_its_skill() {
    let tree = not("n1", not("n2", s("a")));
    assert_eq!(normalize(&tree), s("a"));
}

#[test]
fn single_child_parallel_is_unchanged() {
    let tree = parallel(1, "p", forest![s("a")]);
    assert_eq!(
        normalize(&tree),
        Btree::node(NodeKind::Parallel(1), "p", Forest::child(s("a")))
    );
}

#[test]
fn two_skill_fallback_is_unchanged() {
    let tree = Btree::node(
        NodeKind::Fallback,
        "f",
        Forest::add(s("a"), Forest::child(s("b"))),
    );
    assert_eq!(normalize(&tree), tree);
    assert_eq!(count_skills(&tree), 2);
}

#[test]
fn single_negation_over_non_negation_is_kept() {
    let inners = [
        s("a"),
        truth(),
        is_running("r", s("a")),
        parallel(0, "p", forest![s("a")]),
    ];
    for inner in inners {
        let tree = Btree::dec(DecKind::Not, "n", inner.clone());
        assert_eq!(
            normalize(&tree),
            Btree::dec(DecKind::Not, "n", normalize(&inner))
        );
    }
}

#[test]
fn deep_mixed_tree_shrinks() {
    // A door-opening routine with redundant structure in every corner.
    let tree = fallback(
        "open door",
        forest![
            sequence(
                "try handle",
                forest![
                    not("unlocked", not("locked?", s("IsDoorUnlocked"))),
                    sequence("push", forest![s("PushDoor")]),
                ],
            ),
            fallback("kick", forest![sequence("kick once", forest![s("KickDoor")])]),
            parallel(1, "call for help", forest![s("Shout")]),
        ],
    );

    let expected = fallback(
        "open door",
        forest![
            sequence("try handle", forest![s("IsDoorUnlocked"), s("PushDoor")]),
            s("KickDoor"),
            parallel(1, "call for help", forest![s("Shout")]),
        ],
    );

    let normalized = normalize(&tree);
    assert_eq!(normalized, expected);
    assert_eq!(count_skills(&normalized), count_skills(&tree));
    assert!(node_count(&normalized) < node_count(&tree));
    assert!(is_normal(&normalized));
    assert!(!is_normal(&tree));
}

#[test]
fn normalized_tree_ticks_like_the_original() {
    let tree = sequence(
        "main",
        forest![
            fallback("check", forest![not("a", not("b", s("ConditionFalse")))]),
            s("Action1SecondSuccess"),
        ],
    );
    let normalized = normalize(&tree);
    assert_eq!(
        normalized,
        sequence(
            "main",
            forest![s("ConditionFalse"), s("Action1SecondSuccess")]
        )
    );

    let mut original_skills = DummySkills::new();
    let mut normalized_skills = DummySkills::new();
    assert_eq!(tree.tick(&mut original_skills), Ok(Status::Failure));
    assert_eq!(normalized.tick(&mut normalized_skills), Ok(Status::Failure));
    assert_eq!(original_skills.executed(), normalized_skills.executed());
}

#[test]
fn checked_normalization_guards_deep_chains() {
    let mut tree = s("a");
    for i in 0..64 {
        tree = Btree::dec(DecKind::IsRunning, format!("r{i}"), tree);
    }
    assert_eq!(depth(&tree), 65);

    assert_eq!(
        normalize_checked(&tree, &TreeConfig::with_max_depth(32)),
        Err(TreeError::TooDeep {
            depth: 65,
            max_depth: 32
        })
    );
    assert_eq!(normalize_checked(&tree, &TreeConfig::default()), Ok(tree));
}

#[test]
fn default_limit_is_safe_for_checked_passes() {
    let limit = TreeConfig::DEFAULT_MAX_DEPTH;
    let mut tree = s("a");
    for i in 1..limit {
        tree = Btree::dec(DecKind::IsRunning, format!("r{i}"), tree);
    }
    assert_eq!(depth(&tree), limit);

    let config = TreeConfig::default();
    assert_eq!(count_skills_checked(&tree, &config), Ok(1));
    let normalized = normalize_checked(&tree, &config).unwrap();
    assert_eq!(normalized, tree);

    let deeper = Btree::dec(DecKind::IsRunning, "top", tree);
    assert_eq!(
        normalize_checked(&deeper, &config),
        Err(TreeError::TooDeep {
            depth: limit + 1,
            max_depth: limit
        })
    );
}

#[test]
fn default_limit_is_safe_for_negation_chains() {
    // Stacked negations exercise the rewriting arms at full depth.
    let limit = TreeConfig::DEFAULT_MAX_DEPTH;
    let mut tree = s("a");
    for i in 1..limit {
        tree = Btree::dec(DecKind::Not, format!("n{i}"), tree);
    }

    // An odd number of negations reduces to the innermost one.
    assert_eq!((limit - 1) % 2, 1);
    let normalized = normalize_checked(&tree, &TreeConfig::default()).unwrap();
    assert_eq!(normalized, Btree::dec(DecKind::Not, "n1", s("a")));
}

#[test]
fn original_is_left_untouched() {
    let tree = not("n1", not("n2", s("a")));
    let copy = tree.clone();
    let _ = normalize(&tree);
    assert_eq!(tree, copy);
}

#[test]
fn rendering_uses_skill_names() {
    let tree = sequence("s", forest![s("Grasp"), not("n", truth())]);
    assert_eq!(
        tree.to_string(),
        "Sequence \"s\"\n  Skill Grasp\n  Not \"n\"\n    True"
    );
}
