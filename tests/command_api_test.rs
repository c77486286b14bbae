//! Integration tests for the command tree public API.

use std::cell::RefCell;
use std::rc::Rc;

use cmdtree::command::{
    CommandNode, Flow, Invocation, NodeState, StateField, StateKind, StateValue,
};
use cmdtree::sender::MockSender;
use cmdtree::CmdTreeError;

type Log = Rc<RefCell<Vec<(String, Vec<String>, bool)>>>;

fn recording(label: &str, log: &Log, flow: Flow) -> CommandNode {
    let log = Rc::clone(log);
    CommandNode::from_fn(label, move |_sender, ctx, _state| {
        log.borrow_mut()
            .push((ctx.label().to_string(), ctx.args().to_vec(), ctx.is_terminal()));
        Ok(flow)
    })
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|item| item.to_string()).collect()
}

#[test]
fn childless_root_consumes_everything() {
    let log = Log::default();
    let mut root = recording("root", &log, Flow::Continue);
    let mut sender = MockSender::new("tester");

    let handled = root
        .dispatch(&mut sender, &Invocation::new("root", ["a", "b"]))
        .unwrap();

    assert!(handled);
    assert_eq!(
        log.borrow().as_slice(),
        &[("root".to_string(), strings(&["a", "b"]), true)]
    );
}

#[test]
fn split_at_first_child_label() {
    let log = Log::default();
    let mut root = recording("root", &log, Flow::Continue)
        .with_subcommand(recording("sub", &log, Flow::Continue));
    let mut sender = MockSender::new("tester");

    root.dispatch(&mut sender, &Invocation::new("root", ["x", "SUB", "y", "z"]))
        .unwrap();

    assert_eq!(
        log.borrow().as_slice(),
        &[
            ("root".to_string(), strings(&["x"]), false),
            ("SUB".to_string(), strings(&["y", "z"]), true),
        ]
    );
}

#[test]
fn stop_prevents_delegation() {
    let log = Log::default();
    let mut root = recording("root", &log, Flow::Stop)
        .with_subcommand(recording("sub", &log, Flow::Continue));
    let mut sender = MockSender::new("tester");

    let handled = root
        .dispatch(&mut sender, &Invocation::new("root", ["sub"]))
        .unwrap();

    assert!(handled);
    assert_eq!(log.borrow().len(), 1);
}

#[test]
fn state_flows_to_matched_child() {
    let parent = CommandNode::from_fn("root", |_sender, ctx, state| {
        state.set("target", ctx.arg(0).unwrap_or("nobody"))?;
        Ok(Flow::Continue)
    })
    .with_state(NodeState::new().declare("target", StateField::new(StateKind::Text)));
    let child = CommandNode::from_fn("show", |sender, _ctx, state| {
        sender.send_message(state.text("target").unwrap_or("unset"));
        Ok(Flow::Continue)
    })
    .with_state(NodeState::new().declare("target", StateField::new(StateKind::Text)));

    let mut root = parent.with_subcommand(child);
    let mut sender = MockSender::new("tester");
    root.dispatch(&mut sender, &Invocation::new("root", ["bob", "show"]))
        .unwrap();

    assert_eq!(sender.messages(), &["bob".to_string()]);
    assert_eq!(root.state().text("target"), Some("bob"));
}

#[test]
fn no_inherit_blocks_default_but_not_forced_fields() {
    let parent_state = NodeState::new()
        .no_inherit()
        .declare("plain", StateField::with_value("p"))
        .declare("forced", StateField::with_value("f").force());
    let child_state = NodeState::new()
        .declare("plain", StateField::new(StateKind::Text))
        .declare("forced", StateField::new(StateKind::Text));

    let mut root = CommandNode::from_fn("root", |_s, _c, _st| Ok(Flow::Continue))
        .with_state(parent_state)
        .with_subcommand(
            CommandNode::from_fn("sub", |_s, _c, _st| Ok(Flow::Continue)).with_state(child_state),
        );
    let mut sender = MockSender::new("tester");
    root.dispatch(&mut sender, &Invocation::new("root", ["sub"]))
        .unwrap();

    let sub = root.subcommand("sub").unwrap();
    assert_eq!(sub.state().get("plain"), Some(&StateValue::Unset(StateKind::Text)));
    assert_eq!(sub.state().text("forced"), Some("f"));
}

#[test]
fn kind_mismatch_aborts_chain() {
    let log = Log::default();
    let mut root = recording("root", &log, Flow::Continue)
        .with_state(NodeState::new().declare("count", StateField::with_value(3i64)))
        .with_subcommand(
            recording("sub", &log, Flow::Continue)
                .with_state(NodeState::new().declare("count", StateField::new(StateKind::Text))),
        );
    let mut sender = MockSender::new("tester");

    let err = root
        .dispatch(&mut sender, &Invocation::new("root", ["sub"]))
        .unwrap_err();

    assert!(matches!(err, CmdTreeError::PropagationTypeMismatch { .. }));
    assert!(err.is_propagation());
    assert_eq!(log.borrow().len(), 1);
}

#[test]
fn sealed_child_field_is_denied() {
    let mut root = CommandNode::from_fn("root", |_s, _c, _st| Ok(Flow::Continue))
        .with_state(NodeState::new().declare("mode", StateField::with_value("fast")))
        .with_subcommand(
            CommandNode::from_fn("sub", |_s, _c, _st| Ok(Flow::Continue)).with_state(
                NodeState::new().declare("mode", StateField::with_value("slow").sealed()),
            ),
        );
    let mut sender = MockSender::new("tester");

    let err = root
        .dispatch(&mut sender, &Invocation::new("root", ["sub"]))
        .unwrap_err();

    assert!(matches!(err, CmdTreeError::PropagationDenied { .. }));
    assert_eq!(root.subcommand("sub").unwrap().state().text("mode"), Some("slow"));
}

#[test]
fn suggestions_leave_state_untouched() {
    let root = cmdtree::builtin::account::account();
    let before = format!("{:?}", root.state());
    let sender = MockSender::new("tester");

    let suggestions = root.suggestions(&sender, &Invocation::new("account", ["bob", "grant", "c"]));

    assert_eq!(suggestions, vec!["chat".to_string()]);
    assert_eq!(format!("{:?}", root.state()), before);
}
