//! Scripted walkthrough of the `Array` container.

use dskit::Array;

fn main() {
    println!("=== Array container - playground ===\n");

    // 1. Construction and basic access
    {
        println!("1. Construction and basic access");
        let a: Array<i32> = Array::new();
        let b: Array<i32> = Array::with_len(5);
        let c = Array::filled(3, 10);
        let d = Array::from([1, 2, 3, 4, 5]);

        println!("{}", a.render("empty"));
        println!("{}", b.render("with_len(5)"));
        println!("{}", c.render("filled(3, 10)"));
        println!("{}", d.render("from literal"));
        println!("d[0] = {}, d.back() = {}\n", d[0], d.back());
    }

    // 2. Checked access
    {
        println!("2. Checked access");
        let d = Array::from([1, 2, 3]);
        println!("d.at(1) = {:?}", d.at(1));
        println!("d.at(9) = {:?}\n", d.at(9));
    }

    // 3. Modifiers
    {
        println!("3. Modifiers");
        let mut m = Array::from([1, 2, 4, 5]);
        println!("{}", m.render("start"));

        m.insert(2, 3).expect("index 2 is in range");
        println!("{}", m.render("after insert(2, 3)"));

        m.remove(0).expect("index 0 is in range");
        println!("{}", m.render("after remove(0)"));

        m.push(6);
        println!("{}", m.render("after push(6)"));

        m.pop();
        println!("{}\n", m.render("after pop()"));
    }

    // 4. Utilities
    {
        println!("4. Utilities");
        let mut u = Array::from([5, 2, 8, 1, 9, 2]);
        println!("{}", u.render("start"));

        u.sort();
        println!("{}", u.render("sorted"));

        u.reverse();
        println!("{}", u.render("reversed"));

        println!("find(8) = {:?}", u.find(&8));
        println!("count(2) = {}", u.count(&2));

        u.fill(0);
        println!("{}\n", u.render("filled with 0"));
    }

    println!("=== end of playground ===");
}
