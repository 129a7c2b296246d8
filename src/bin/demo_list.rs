//! Scripted walkthrough of the `LinkedList` container.

use dskit::LinkedList;

fn main() {
    println!("=== LinkedList container - playground ===\n");

    let mut list = LinkedList::new();
    println!("new list: empty = {}, len = {}", list.is_empty(), list.len());

    list.push_back(10);
    list.push_back(20);
    list.push_front(5);

    println!("{}", list.render("contents"));
    println!("len = {}", list.len());

    list.clear();
    println!("after clear: empty = {}, len = {}", list.is_empty(), list.len());
}
