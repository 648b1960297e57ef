use super::*;

#[test]
fn push_assigns_increasing_ids() {
    let mut state = ToastState::default();
    let a = state.push(ToastKind::Success, "first");
    let b = state.push(ToastKind::Error, "second");

    assert!(b > a);
    assert_eq!(state.toasts.len(), 2);
}

#[test]
fn dismiss_removes_only_the_given_toast() {
    let mut state = ToastState::default();
    let a = state.push(ToastKind::Success, "keep");
    let b = state.push(ToastKind::Error, "drop");

    state.dismiss(b);

    assert_eq!(state.toasts.len(), 1);
    assert_eq!(state.toasts[0].id, a);
}

#[test]
fn dismiss_unknown_id_is_a_noop() {
    let mut state = ToastState::default();
    state.push(ToastKind::Success, "only");
    state.dismiss(99);
    assert_eq!(state.toasts.len(), 1);
}

#[test]
fn ids_are_not_reused_after_dismiss() {
    let mut state = ToastState::default();
    let a = state.push(ToastKind::Success, "one");
    state.dismiss(a);
    let b = state.push(ToastKind::Success, "two");
    assert!(b > a);
}
