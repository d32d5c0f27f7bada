use std::sync::atomic::{AtomicU32, Ordering};

use pretty_assertions::assert_eq;
use pure_compose::chai::{cups, recipe, recipe_lines};
use pure_compose::html::Html;
use pure_compose::purity::{check_order_independent, check_pure};
use pure_compose::{Chai, Composer, Guest, Node, RenderError, Result, Root, Scope};

// Shared counter bumped during render. Only here to show it gets caught.
static GUEST: AtomicU32 = AtomicU32::new(0);

fn impure_cup(s: Scope<Root>) -> Result<()> {
    let guest = GUEST.fetch_add(1, Ordering::SeqCst) + 1;
    s.h2(format!("Tea cup for guest #{}", guest))
}

#[test]
fn shared_counter_makes_output_depend_on_call_order() {
    let labels: Vec<String> = (0..3)
        .map(|_| Composer::render(impure_cup).unwrap().text_content())
        .collect();
    assert_eq!(
        labels,
        vec![
            "Tea cup for guest #1",
            "Tea cup for guest #2",
            "Tea cup for guest #3",
        ]
    );

    let err = Composer::render_strict("impure_cup", impure_cup).unwrap_err();
    assert_eq!(err, RenderError::Impure { component: "impure_cup" });
}

#[test]
fn passing_the_guest_as_a_prop_fixes_it() {
    let pure_cup = |s: Scope<Root>| s.cup(Guest::from(1));
    let tree = Composer::render_strict("cup", pure_cup).unwrap();
    assert_eq!(tree.text_content(), "Tea cup for guest #1");
}

#[test]
fn recipe_passes_the_purity_check() {
    for n in [0.0, 2.0, 10.0] {
        let tree = check_pure("recipe", || recipe(n)).unwrap();
        assert_eq!(tree, recipe(n).unwrap());
    }
}

#[test]
fn recipe_ignores_call_order() {
    let inputs = [10.0, 2.0, 2.0, 0.5, 10.0];
    let lines = check_order_independent("recipe", &inputs, |n| recipe_lines(*n)).unwrap();
    assert_eq!(lines[0], lines[4]);
    assert_eq!(lines[1], lines[2]);
    assert_eq!(lines[1][0], "Boil 2 cups of water.");
}

#[test]
fn cups_ignore_call_order() {
    let inputs = [3i64, 0, 12, 3, 1];
    let lists = check_order_independent("cups", &inputs, |c| cups(*c)).unwrap();
    let lens: Vec<usize> = lists.iter().map(Vec::len).collect();
    assert_eq!(lens, vec![3, 0, 12, 3, 1]);
    assert_eq!(lists[0], lists[3]);
}

#[test]
fn interleaving_components_does_not_leak_between_them() {
    let first: Vec<Node> = vec![recipe(2.0).unwrap(), cups(2).unwrap()[1].node.clone()];
    let _ = cups(50).unwrap();
    let _ = recipe(99.0).unwrap();
    let second: Vec<Node> = vec![recipe(2.0).unwrap(), cups(2).unwrap()[1].node.clone()];
    assert_eq!(first, second);
}

#[test]
fn concurrent_renders_agree() {
    let handles: Vec<_> = (0..8)
        .map(|_| std::thread::spawn(|| (recipe(10.0).unwrap(), cups(12).unwrap())))
        .collect();
    let results: Vec<_> = handles.into_iter().map(|h| h.join().unwrap()).collect();
    for result in &results[1..] {
        assert_eq!(result, &results[0]);
    }
}
