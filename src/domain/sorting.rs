/// Anything that can be shown as done or not done
pub trait Completable {
    fn is_done(&self) -> bool;
}

/// Orders items for display: incomplete first, then complete
///
/// The partition is stable, so items keep their relative order within each
/// group. The input slice is only borrowed; callers keep their storage order
/// and ids.
///
/// # Examples
/// ```
/// use todolist_core::domain::sorting::ordered_for_display;
/// use todolist_core::domain::todo::{Todo, TodoId};
///
/// let mut todos = vec![
///     Todo::new(TodoId::new(1), "A".to_string()),
///     Todo::new(TodoId::new(2), "B".to_string()),
/// ];
/// todos[0].mark_completed();
///
/// let ordered = ordered_for_display(&todos, |t| t.completed);
/// assert_eq!(ordered[0].id, TodoId::new(2));
/// ```
pub fn ordered_for_display<T, F>(items: &[T], is_complete: F) -> Vec<&T>
where
    F: Fn(&T) -> bool,
{
    let (complete, mut incomplete): (Vec<&T>, Vec<&T>) =
        items.iter().partition(|item| is_complete(item));
    incomplete.extend(complete);
    incomplete
}

/// Same as [`ordered_for_display`] using the item's own completion state
pub fn display_order<T: Completable>(items: &[T]) -> Vec<&T> {
    ordered_for_display(items, T::is_done)
}
