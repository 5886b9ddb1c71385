//! Tests for priority-ordering containers.
//!
//! All the tests here are helpers defined for some implementation of the `PriorityOrdering`
//! trait, ordering [`Task`]s by their priority.
use super::{by_priority, ByPriority, Task};
use priority_ordering::{Config, Error, Handle, PriorityOrdering, TieBreak};

const SOME: usize = 500;
const MANY: usize = 2000;

/// The sample day, in insertion order.
fn sample_day() -> Vec<Task> {
    vec![
        Task::new("eating", 3),
        Task::new("wokeup", 1),
        Task::new("brushing", 2),
        Task::new("go college", 4),
        Task::new("return home", 7),
        Task::new("mark attendance", 6),
        Task::new("mark attendance", 5),
        Task::new("sleep", 8),
    ]
}

fn queue<Q: PriorityOrdering<Task, ByPriority>>(config: Config) -> Q {
    Q::with_config(by_priority(), config)
}

fn drain<Q: PriorityOrdering<Task, ByPriority>>(q: &mut Q) -> Vec<Task> {
    let mut out = vec![];
    while !q.is_empty() {
        out.push(q.extract().unwrap());
    }
    out
}

/// Insert `n` tasks with priorities from `next_priority`, then check extraction order and
/// conservation.
fn do_insert_extract<Q: PriorityOrdering<Task, ByPriority>>(
    n: usize,
    config: Config,
    mut next_priority: impl FnMut(usize) -> u32,
) {
    let mut q: Q = queue(config);
    let mut inserted = vec![];
    for i in 0..n {
        let t = Task::new(&format!("t{i}"), next_priority(i));
        q.insert(t.clone());
        inserted.push(t);
    }
    assert_eq!(q.len(), n);

    let out = drain(&mut q);
    for (i, w) in out.windows(2).enumerate() {
        match config.direction {
            priority_ordering::Direction::Ascending => {
                assert!(w[0].priority <= w[1].priority, "out[{}] > out[{}]", i, i + 1)
            }
            priority_ordering::Direction::Descending => {
                assert!(w[0].priority >= w[1].priority, "out[{}] < out[{}]", i, i + 1)
            }
        }
    }

    let mut out = out;
    out.sort();
    inserted.sort();
    assert_eq!(out, inserted);
}

pub fn empty_errors<Q: PriorityOrdering<Task, ByPriority>>() {
    let mut q: Q = queue(Config::default());
    assert!(q.is_empty());
    assert_eq!(q.len(), 0);
    assert_eq!(q.peek(), Err(Error::EmptyContainer));
    assert_eq!(q.extract(), Err(Error::EmptyContainer));

    // Errors leave the container usable.
    q.insert(Task::new("a", 1));
    assert_eq!(q.extract(), Ok(Task::new("a", 1)));
}

pub fn drained_errors<Q: PriorityOrdering<Task, ByPriority>>() {
    let mut q: Q = queue(Config::default());
    for t in sample_day() {
        q.insert(t);
    }
    drain(&mut q);
    assert_eq!(q.peek(), Err(Error::EmptyContainer));
    assert_eq!(q.extract(), Err(Error::EmptyContainer));
    assert_eq!(q.extract(), Err(Error::EmptyContainer));
}

pub fn sample_day_ascending<Q: PriorityOrdering<Task, ByPriority>>() {
    let mut q: Q = queue(Config::default());
    for t in sample_day() {
        q.insert(t);
    }

    let out = drain(&mut q);
    let priorities: Vec<u32> = out.iter().map(|t| t.priority).collect();
    assert_eq!(priorities, vec![1, 2, 3, 4, 5, 6, 7, 8]);
    let labels: Vec<&str> = out.iter().map(|t| t.label.as_str()).collect();
    assert_eq!(
        labels,
        vec![
            "wokeup",
            "brushing",
            "eating",
            "go college",
            "mark attendance",
            "mark attendance",
            "return home",
            "sleep",
        ]
    );
}

pub fn sample_day_descending<Q: PriorityOrdering<Task, ByPriority>>() {
    let mut q: Q = queue(Config::default().descending());
    for t in sample_day() {
        q.insert(t);
    }
    let priorities: Vec<u32> = drain(&mut q).iter().map(|t| t.priority).collect();
    assert_eq!(priorities, vec![8, 7, 6, 5, 4, 3, 2, 1]);
}

pub fn peek_idempotent<Q: PriorityOrdering<Task, ByPriority>>() {
    let mut q: Q = queue(Config::default());
    for t in sample_day() {
        q.insert(t);
    }
    for _ in 0..3 {
        assert_eq!(q.peek(), Ok(&Task::new("wokeup", 1)));
        assert_eq!(q.len(), 8);
    }
    let peeked = q.peek().unwrap().clone();
    assert_eq!(q.extract(), Ok(peeked));
    assert_eq!(q.peek(), Ok(&Task::new("brushing", 2)));
}

pub fn size_consistency<Q: PriorityOrdering<Task, ByPriority>>() {
    let mut q: Q = queue(Config::default());
    for n in 1..=SOME {
        q.insert(Task::new("t", (n % 7) as u32));
        assert_eq!(q.len(), n);
    }
    for k in 1..=SOME / 2 {
        q.extract().unwrap();
        assert_eq!(q.len(), SOME - k);
    }
}

pub fn fifo_ties<Q: PriorityOrdering<Task, ByPriority>>() {
    for config in [Config::default(), Config::default().descending()] {
        let mut q: Q = queue(config);
        for i in 0..SOME {
            q.insert(Task::new(&format!("t{i}"), (i % 3) as u32));
        }
        let out = drain(&mut q);

        // Within each priority, labels must come out in insertion order.
        for p in 0..3 {
            let order: Vec<usize> = out
                .iter()
                .filter(|t| t.priority == p)
                .map(|t| t.label[1..].parse().unwrap())
                .collect();
            assert!(order.windows(2).all(|w| w[0] < w[1]), "priority {}", p);
        }
    }
}

pub fn arbitrary_ties<Q: PriorityOrdering<Task, ByPriority>>() {
    let config = Config::default().tie_break(TieBreak::Arbitrary);
    do_insert_extract::<Q>(SOME, config, |i| (i % 4) as u32);
    do_insert_extract::<Q>(SOME, config.descending(), |i| (i % 4) as u32);
}

pub fn insert_many_ascending<Q: PriorityOrdering<Task, ByPriority>>() {
    do_insert_extract::<Q>(MANY, Config::default(), |i| i as u32);
}

pub fn insert_many_descending<Q: PriorityOrdering<Task, ByPriority>>() {
    do_insert_extract::<Q>(MANY, Config::default(), |i| (MANY - i) as u32);
}

pub fn insert_many_random<Q: PriorityOrdering<Task, ByPriority>>() {
    use rand::{rngs::StdRng, Rng, SeedableRng};
    let mut rng = StdRng::seed_from_u64(42);
    do_insert_extract::<Q>(MANY, Config::default(), |_| rng.gen_range(0..100));
    do_insert_extract::<Q>(MANY, Config::default().descending(), |_| {
        rng.gen_range(0..100)
    });
}

pub fn interleaved<Q: PriorityOrdering<Task, ByPriority>>() {
    use rand::{rngs::StdRng, Rng, SeedableRng};
    let mut rng = StdRng::seed_from_u64(7);
    let mut q: Q = queue(Config::default());
    let mut inserted = 0;
    let mut extracted = vec![];
    for i in 0..MANY {
        if q.is_empty() || rng.gen_bool(0.6) {
            q.insert(Task::new(&format!("t{i}"), rng.gen_range(0..1000)));
            inserted += 1;
        } else {
            // Nothing still held may precede what was just extracted.
            let t = q.extract().unwrap();
            if let Ok(next) = q.peek() {
                assert!(next.priority >= t.priority, "{:?} before {:?}", t, next);
            }
            extracted.push(t);
        }
        assert_eq!(q.len(), inserted - extracted.len());
    }
    extracted.extend(drain(&mut q));
    assert_eq!(extracted.len(), inserted);
}

pub fn remove_handles<Q: PriorityOrdering<Task, ByPriority>>() {
    let mut q: Q = queue(Config::default());
    let handles: Vec<Handle> = sample_day().into_iter().map(|t| q.insert(t)).collect();

    // Drop both attendance entries, then the lowest priority.
    assert_eq!(q.remove(handles[5]), Some(Task::new("mark attendance", 6)));
    assert_eq!(q.remove(handles[6]), Some(Task::new("mark attendance", 5)));
    assert_eq!(q.remove(handles[1]), Some(Task::new("wokeup", 1)));
    assert_eq!(q.len(), 5);

    // Stale handles do nothing.
    assert_eq!(q.remove(handles[5]), None);
    assert!(!q.contains(handles[1]));
    assert!(q.contains(handles[0]));
    assert_eq!(q.len(), 5);

    assert_eq!(q.extract(), Ok(Task::new("brushing", 2)));
    assert!(!q.contains(handles[2]));
    let priorities: Vec<u32> = drain(&mut q).iter().map(|t| t.priority).collect();
    assert_eq!(priorities, vec![3, 4, 7, 8]);
}

pub fn clear_then_reuse<Q: PriorityOrdering<Task, ByPriority>>() {
    let mut q: Q = queue(Config::default().capacity(8));
    let handles: Vec<Handle> = sample_day().into_iter().map(|t| q.insert(t)).collect();
    q.clear();
    assert!(q.is_empty());
    assert_eq!(q.peek(), Err(Error::EmptyContainer));
    assert!(handles.iter().all(|&h| !q.contains(h)));

    let h = q.insert(Task::new("again", 0));
    assert!(!handles.contains(&h));
    assert_eq!(q.extract(), Ok(Task::new("again", 0)));
}
