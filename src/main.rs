//! Interactive menu over the bid engines.
//!
//! Pick a structure, load a CSV export into it, then search, remove, sort,
//! or display. Pass a CSV path as the first argument to make it the default
//! answer for every Load prompt:
//!
//! ```text
//! $ bidindex eBid_Monthly_Sales.csv
//! ```

use std::io::{self, Write};
use std::time::Instant;

use bidindex::{load_bids, quick_sort, selection_sort, Bid, BidTable, BidTree};

fn main() -> anyhow::Result<()> {
    let default_path = std::env::args().nth(1);

    loop {
        println!();
        println!("Menu:");
        println!("  1. Vector of bids (sorting)");
        println!("  2. Binary search tree of bids");
        println!("  3. Hash table of bids");
        println!("  9. Exit");
        let Some(choice) = read_input("Enter choice: ")? else {
            break;
        };
        match choice.as_str() {
            "1" => vector_menu(default_path.as_deref())?,
            "2" => tree_menu(default_path.as_deref())?,
            "3" => table_menu(default_path.as_deref())?,
            "9" => break,
            other => println!("{} is not a valid option.", other),
        }
    }
    println!("Good bye.");
    Ok(())
}

/// Print `message`, flush, and read one trimmed line from stdin.
///
/// `None` means stdin hit end of file; callers treat it like Exit.
fn read_input(message: &str) -> anyhow::Result<Option<String>> {
    print!("{}", message);
    io::stdout().flush()?;
    let mut line = String::new();
    if io::stdin().read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}

/// Prompt for a CSV path (offering `default_path` as the empty-answer
/// default) and load it, reporting the row count and elapsed time.
///
/// A failed load is printed and yields `None`; the menu keeps running.
fn load_menu_action(default_path: Option<&str>) -> anyhow::Result<Option<Vec<Bid>>> {
    let message = match default_path {
        Some(path) => format!("CSV path [{}]: ", path),
        None => "CSV path: ".to_string(),
    };
    let Some(answer) = read_input(&message)? else {
        return Ok(None);
    };
    let path = if answer.is_empty() {
        match default_path {
            Some(path) => path.to_string(),
            None => {
                println!("No path given.");
                return Ok(None);
            }
        }
    } else {
        answer
    };

    let started = Instant::now();
    match load_bids(&path) {
        Ok(bids) => {
            println!("{} bid(s) loaded in {:?}.", bids.len(), started.elapsed());
            Ok(Some(bids))
        }
        Err(err) => {
            eprintln!("Load failed: {}", err);
            Ok(None)
        }
    }
}

/// Menu over a plain vector of bids and the in-place sorts.
fn vector_menu(default_path: Option<&str>) -> anyhow::Result<()> {
    let mut bids: Vec<Bid> = Vec::new();
    loop {
        println!();
        println!("Vector menu:");
        println!("  1. Load bids");
        println!("  2. Display all bids");
        println!("  3. Selection sort by title");
        println!("  4. Quick sort by title");
        println!("  9. Return");
        let Some(choice) = read_input("Enter choice: ")? else {
            return Ok(());
        };
        match choice.as_str() {
            "1" => {
                if let Some(loaded) = load_menu_action(default_path)? {
                    bids = loaded;
                }
            }
            "2" => {
                for bid in &bids {
                    println!("{}", bid);
                }
                println!("{} bid(s).", bids.len());
            }
            "3" => {
                let started = Instant::now();
                selection_sort(&mut bids);
                println!("{} bid(s) sorted in {:?}.", bids.len(), started.elapsed());
            }
            "4" => {
                let started = Instant::now();
                quick_sort(&mut bids);
                println!("{} bid(s) sorted in {:?}.", bids.len(), started.elapsed());
            }
            "9" => return Ok(()),
            other => println!("{} is not a valid option.", other),
        }
    }
}

/// Menu over the binary search tree.
fn tree_menu(default_path: Option<&str>) -> anyhow::Result<()> {
    let mut tree = BidTree::new();
    loop {
        println!();
        println!("Binary search tree menu:");
        println!("  1. Load bids");
        println!("  2. Display all bids");
        println!("  3. Find bid");
        println!("  4. Remove bid");
        println!("  9. Return");
        let Some(choice) = read_input("Enter choice: ")? else {
            return Ok(());
        };
        match choice.as_str() {
            "1" => {
                if let Some(bids) = load_menu_action(default_path)? {
                    tree = BidTree::new();
                    tree.load(bids);
                }
            }
            "2" => {
                for bid in tree.iter() {
                    println!("{}", bid);
                }
                println!("{} bid(s).", tree.len());
            }
            "3" => {
                let Some(id) = read_input("Bid id: ")? else {
                    return Ok(());
                };
                let started = Instant::now();
                match tree.search(&id) {
                    Some(bid) => println!("{}", bid),
                    None => println!("Bid id {} not found.", id),
                }
                println!("Search took {:?}.", started.elapsed());
            }
            "4" => {
                let Some(id) = read_input("Bid id: ")? else {
                    return Ok(());
                };
                match tree.remove(&id) {
                    Some(bid) => println!("Removed {}", bid),
                    None => println!("Bid id {} not found.", id),
                }
            }
            "9" => return Ok(()),
            other => println!("{} is not a valid option.", other),
        }
    }
}

/// Menu over the chained hash table.
///
/// Unlike the tree, table lookups can fail outright: a non-numeric id is an
/// invalid key for this structure, reported as its own message rather than
/// "not found".
fn table_menu(default_path: Option<&str>) -> anyhow::Result<()> {
    let mut table = BidTable::new();
    loop {
        println!();
        println!("Hash table menu:");
        println!("  1. Load bids");
        println!("  2. Display all bids");
        println!("  3. Find bid");
        println!("  4. Remove bid");
        println!("  9. Return");
        let Some(choice) = read_input("Enter choice: ")? else {
            return Ok(());
        };
        match choice.as_str() {
            "1" => {
                if let Some(bids) = load_menu_action(default_path)? {
                    let mut fresh = BidTable::new();
                    match fresh.load(bids) {
                        Ok(()) => table = fresh,
                        Err(err) => eprintln!("Load aborted: {}", err),
                    }
                }
            }
            "2" => {
                for bid in table.iter() {
                    println!("{}", bid);
                }
                println!("{} bid(s).", table.len());
            }
            "3" => {
                let Some(id) = read_input("Bid id: ")? else {
                    return Ok(());
                };
                let started = Instant::now();
                match table.search(&id) {
                    Ok(Some(bid)) => println!("{}", bid),
                    Ok(None) => println!("Bid id {} not found.", id),
                    Err(err) => println!("{}", err),
                }
                println!("Search took {:?}.", started.elapsed());
            }
            "4" => {
                let Some(id) = read_input("Bid id: ")? else {
                    return Ok(());
                };
                match table.remove(&id) {
                    Ok(Some(bid)) => println!("Removed {}", bid),
                    Ok(None) => println!("Bid id {} not found.", id),
                    Err(err) => println!("{}", err),
                }
            }
            "9" => return Ok(()),
            other => println!("{} is not a valid option.", other),
        }
    }
}
