use crate::domain::{
    list::{List, ListId},
    sorting::display_order,
    todo::{Todo, TodoId},
    validation::{self, LIST_NAME},
};
use crate::error::{Result, TodoError};
use serde::{Deserialize, Serialize};

/// All lists belonging to one session
///
/// Every mutating operation validates before touching state, so a failed
/// call leaves the store exactly as it was.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Store {
    #[serde(default)]
    pub lists: Vec<List>,
}

impl Store {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn list(&self, list_id: ListId) -> Result<&List> {
        self.lists
            .iter()
            .find(|list| list.id == list_id)
            .ok_or(TodoError::ListNotFound(list_id))
    }

    fn list_mut(&mut self, list_id: ListId) -> Result<&mut List> {
        self.lists
            .iter_mut()
            .find(|list| list.id == list_id)
            .ok_or(TodoError::ListNotFound(list_id))
    }

    pub fn todo(&self, list_id: ListId, todo_id: TodoId) -> Result<&Todo> {
        self.list(list_id)?
            .todo(todo_id)
            .ok_or(TodoError::TodoNotFound {
                list: list_id,
                todo: todo_id,
            })
    }

    fn check_list_name(&self, name: &str, renaming: Option<ListId>) -> Result<()> {
        validation::check_length(LIST_NAME, name)?;

        let taken = self
            .lists
            .iter()
            .filter(|list| Some(list.id) != renaming)
            .any(|list| list.name == name);
        if taken {
            return Err(TodoError::DuplicateName(name.to_string()));
        }
        Ok(())
    }

    /// Creates an empty list with the next free id
    pub fn create_list(&mut self, name: &str) -> Result<&List> {
        self.check_list_name(name, None)?;

        let id = ListId::next_after(self.lists.iter().map(|list| &list.id))?;
        self.lists.push(List::new(id, name.to_string()));
        tracing::debug!(list_id = %id, "list created");

        Ok(&self.lists[self.lists.len() - 1])
    }

    /// Renames a list in place; its own current name does not count as taken
    pub fn rename_list(&mut self, list_id: ListId, new_name: &str) -> Result<&List> {
        self.list(list_id)?;
        self.check_list_name(new_name, Some(list_id))?;

        let list = self.list_mut(list_id)?;
        list.name = new_name.to_string();
        tracing::debug!(list_id = %list_id, "list renamed");

        Ok(&*list)
    }

    /// Removes a list, keeping the order of the others
    pub fn delete_list(&mut self, list_id: ListId) -> Result<List> {
        let pos = self
            .lists
            .iter()
            .position(|list| list.id == list_id)
            .ok_or(TodoError::ListNotFound(list_id))?;

        let removed = self.lists.remove(pos);
        tracing::debug!(list_id = %list_id, "list deleted");
        Ok(removed)
    }

    pub fn add_todo(&mut self, list_id: ListId, text: &str) -> Result<&Todo> {
        self.list_mut(list_id)?.add_todo(text)
    }

    pub fn remove_todo(&mut self, list_id: ListId, todo_id: TodoId) -> Result<Todo> {
        self.list_mut(list_id)?.remove_todo(todo_id)
    }

    pub fn set_todo_completed(
        &mut self,
        list_id: ListId,
        todo_id: TodoId,
        completed: bool,
    ) -> Result<()> {
        self.list_mut(list_id)?
            .set_todo_completed(todo_id, completed)
    }

    pub fn complete_all(&mut self, list_id: ListId) -> Result<()> {
        self.list_mut(list_id)?.complete_all();
        Ok(())
    }

    /// Lists with incomplete ones first; storage order is untouched
    pub fn lists_for_display(&self) -> Vec<&List> {
        display_order(&self.lists)
    }
}

/// True when the list has todos and all of them are completed
pub fn is_list_complete(list: &List) -> bool {
    list.is_complete()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ids(store: &Store) -> Vec<u32> {
        store.lists.iter().map(|l| l.id.value()).collect()
    }

    #[test]
    fn test_create_list_name_length() {
        let mut store = Store::new();

        let result = store.create_list(&"a".repeat(101));
        assert!(matches!(result, Err(TodoError::InvalidLength { .. })));
        assert!(store.lists.is_empty());

        let list = store.create_list(&"a".repeat(100)).unwrap();
        assert_eq!(list.id, ListId::new(1));
        assert!(list.todos.is_empty());

        assert!(matches!(
            store.create_list(""),
            Err(TodoError::InvalidLength { .. })
        ));
    }

    #[test]
    fn test_create_list_duplicate_name() {
        let mut store = Store::new();
        store.create_list("Groceries").unwrap();

        let result = store.create_list("Groceries");
        assert!(matches!(result, Err(TodoError::DuplicateName(_))));
        assert_eq!(store.lists.len(), 1);

        // Case-sensitive
        store.create_list("groceries").unwrap();
        assert_eq!(store.lists.len(), 2);
    }

    #[test]
    fn test_ids_not_renumbered_after_delete() {
        let mut store = Store::new();
        store.create_list("One").unwrap();
        store.create_list("Two").unwrap();
        store.create_list("Three").unwrap();

        let removed = store.delete_list(ListId::new(2)).unwrap();
        assert_eq!(removed.name, "Two");
        assert_eq!(ids(&store), vec![1, 3]);

        let list = store.create_list("Four").unwrap();
        assert_eq!(list.id, ListId::new(4));
        assert_eq!(ids(&store), vec![1, 3, 4]);
    }

    #[test]
    fn test_ids_restart_when_store_emptied() {
        let mut store = Store::new();
        store.create_list("One").unwrap();
        store.delete_list(ListId::new(1)).unwrap();

        let list = store.create_list("Again").unwrap();
        assert_eq!(list.id, ListId::new(1));
    }

    #[test]
    fn test_create_list_after_max_id_fails() {
        let json = r#"{"lists":[{"id":4294967295,"name":"Last","todos":[]}]}"#;
        let mut store: Store = serde_json::from_str(json).unwrap();
        let before = store.clone();

        assert!(matches!(
            store.create_list("Next"),
            Err(TodoError::IdsExhausted(_))
        ));
        assert_eq!(store, before);
    }

    #[test]
    fn test_delete_missing_list() {
        let mut store = Store::new();
        store.create_list("One").unwrap();

        let result = store.delete_list(ListId::new(5));
        assert!(matches!(result, Err(TodoError::ListNotFound(_))));
        assert_eq!(store.lists.len(), 1);
    }

    #[test]
    fn test_rename_to_own_name() {
        let mut store = Store::new();
        store.create_list("Groceries").unwrap();

        let list = store.rename_list(ListId::new(1), "Groceries").unwrap();
        assert_eq!(list.name, "Groceries");
    }

    #[test]
    fn test_rename_keeps_position_and_todos() {
        let mut store = Store::new();
        store.create_list("One").unwrap();
        store.create_list("Two").unwrap();
        store.add_todo(ListId::new(1), "Task").unwrap();

        store.rename_list(ListId::new(1), "First").unwrap();

        assert_eq!(store.lists[0].name, "First");
        assert_eq!(store.lists[0].id, ListId::new(1));
        assert_eq!(store.lists[0].todos.len(), 1);
    }

    #[test]
    fn test_rename_rejections() {
        let mut store = Store::new();
        store.create_list("One").unwrap();
        store.create_list("Two").unwrap();

        assert!(matches!(
            store.rename_list(ListId::new(1), "Two"),
            Err(TodoError::DuplicateName(_))
        ));
        assert!(matches!(
            store.rename_list(ListId::new(1), ""),
            Err(TodoError::InvalidLength { .. })
        ));
        assert!(matches!(
            store.rename_list(ListId::new(9), "Nine"),
            Err(TodoError::ListNotFound(_))
        ));
        assert_eq!(store.lists[0].name, "One");
    }

    #[test]
    fn test_todo_operations_on_missing_list() {
        let mut store = Store::new();

        assert!(matches!(
            store.add_todo(ListId::new(1), "Task"),
            Err(TodoError::ListNotFound(_))
        ));
        assert!(matches!(
            store.remove_todo(ListId::new(1), TodoId::new(1)),
            Err(TodoError::ListNotFound(_))
        ));
        assert!(matches!(
            store.set_todo_completed(ListId::new(1), TodoId::new(1), true),
            Err(TodoError::ListNotFound(_))
        ));
        assert!(matches!(
            store.complete_all(ListId::new(1)),
            Err(TodoError::ListNotFound(_))
        ));
    }

    #[test]
    fn test_remove_todo_from_middle() {
        let mut store = Store::new();
        let list_id = store.create_list("Chores").unwrap().id;
        for name in ["A", "B", "C"] {
            store.add_todo(list_id, name).unwrap();
        }

        store.remove_todo(list_id, TodoId::new(2)).unwrap();

        let list = store.list(list_id).unwrap();
        let names: Vec<&str> = list.todos.iter().map(|t| t.name.as_str()).collect();
        let todo_ids: Vec<u32> = list.todos.iter().map(|t| t.id.value()).collect();
        assert_eq!(names, vec!["A", "C"]);
        assert_eq!(todo_ids, vec![1, 3]);
    }

    #[test]
    fn test_set_missing_todo_leaves_list_unchanged() {
        let mut store = Store::new();
        let list_id = store.create_list("Chores").unwrap().id;
        store.add_todo(list_id, "A").unwrap();
        let before = store.clone();

        let result = store.set_todo_completed(list_id, TodoId::new(42), true);
        assert!(matches!(result, Err(TodoError::TodoNotFound { .. })));
        assert_eq!(store, before);
    }

    #[test]
    fn test_is_list_complete() {
        let mut store = Store::new();
        let list_id = store.create_list("Chores").unwrap().id;
        assert!(!is_list_complete(store.list(list_id).unwrap()));

        store.add_todo(list_id, "A").unwrap();
        store.add_todo(list_id, "B").unwrap();
        store
            .set_todo_completed(list_id, TodoId::new(1), true)
            .unwrap();
        assert!(!is_list_complete(store.list(list_id).unwrap()));

        store.complete_all(list_id).unwrap();
        assert!(is_list_complete(store.list(list_id).unwrap()));
    }

    #[test]
    fn test_lists_for_display() {
        let mut store = Store::new();
        let first = store.create_list("First").unwrap().id;
        store.create_list("Second").unwrap();
        store.add_todo(first, "A").unwrap();
        store.complete_all(first).unwrap();

        let order: Vec<u32> = store
            .lists_for_display()
            .iter()
            .map(|l| l.id.value())
            .collect();
        assert_eq!(order, vec![2, 1]);
        assert_eq!(ids(&store), vec![1, 2]);
    }

    #[test]
    fn test_store_wire_format() {
        let store: Store = serde_json::from_str("{}").unwrap();
        assert!(store.lists.is_empty());

        let json = r#"{"lists":[{"id":3,"name":"Home","todos":[{"id":1,"name":"Sweep","completed":true}]}]}"#;
        let store: Store = serde_json::from_str(json).unwrap();
        assert_eq!(store.lists[0].id, ListId::new(3));
        assert!(store.lists[0].is_complete());
        assert_eq!(serde_json::to_string(&store).unwrap(), json);
    }
}
