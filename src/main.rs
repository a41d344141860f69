use data_structures::collections::contiguous::ArrayList;
use data_structures::collections::error::CollectionError;
use data_structures::collections::linked::{LinkedList, Queue, Stack};

fn main() -> Result<(), CollectionError> {
    println!("\n[LinkedList]\n");

    let mut list = LinkedList::new();
    list.insert_end(500);
    for i in 0..10 {
        list.insert_start(i * 2);
    }
    list.insert_end(800);
    list.remove(&18);
    list.insert_start(99);

    println!("{list}");
    println!("{list:?}");

    println!("\n[ArrayList]\n");

    let mut arr = ArrayList::new();
    for i in 0..9 {
        arr.add(i);
    }
    println!("{arr} (cap {})", arr.cap());

    arr.insert(2, 100)?;
    let removed = arr.remove(3)?;
    println!("removed {removed}: {arr}");

    arr.trim();
    println!("trimmed: {arr:?}");
    println!("as array: {:?}", arr.to_array());

    println!("\n[Stack]\n");

    let mut stack = Stack::new();
    for i in 1..=3 {
        stack.push(i);
    }
    println!("{stack:?}");
    while !stack.is_empty() {
        println!("popped {}", stack.pop()?);
    }

    println!("\n[Queue]\n");

    let mut queue = Queue::new();
    for i in 1..=3 {
        queue.enqueue(i);
    }
    println!("{queue:?}");
    while !queue.is_empty() {
        println!("dequeued {}", queue.dequeue()?);
    }

    // Both of these fail, and are reported through the same error type.
    if let Err(error) = arr.get(arr.len()).map_err(CollectionError::from) {
        println!("\n{error}");
    }
    let error = stack.pop().map_err(CollectionError::from).err();
    println!("{error:?}");

    Ok(())
}
