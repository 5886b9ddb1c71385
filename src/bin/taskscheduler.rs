use anyhow::{anyhow, Context};
use log::info;
use priority_ordering::heap::Queue;
use priority_ordering::{ByKey, Config, Direction, PriorityOrdering, TieBreak};
use std::str::FromStr;
use structopt::StructOpt;

const ABOUT: &str = "
Schedules a day's tasks by priority and prints them in the order they should be done.
Tasks are given as `label=priority`; without any, a sample day is scheduled.
";

/// The sample day, in insertion order.
const SAMPLE: [(&str, i64); 8] = [
    ("eating", 3),
    ("wokeup", 1),
    ("brushing", 2),
    ("go college", 4),
    ("return home", 7),
    ("mark attendance", 6),
    ("mark attendance", 5),
    ("sleep", 8),
];

#[derive(Debug, Clone, PartialEq, Eq)]
struct Task {
    name: String,
    priority: i64,
}

impl FromStr for Task {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (name, priority) = s
            .rsplit_once('=')
            .ok_or_else(|| anyhow!("task `{s}` is not of the form label=priority"))?;
        let priority = priority
            .trim()
            .parse()
            .with_context(|| format!("bad priority for task `{name}`"))?;
        Ok(Self {
            name: name.to_owned(),
            priority,
        })
    }
}

#[derive(StructOpt)]
#[structopt(name = "taskscheduler", about = ABOUT)]
struct Options {
    #[structopt(
        long,
        help = "which priorities come first",
        possible_values = &["ascending", "descending"],
        default_value = "ascending"
    )]
    order: Direction,

    #[structopt(
        long,
        help = "how to order tasks of equal priority",
        possible_values = &["fifo", "arbitrary"],
        default_value = "fifo"
    )]
    tie_break: TieBreak,

    #[structopt(help = "tasks to schedule, as label=priority")]
    tasks: Vec<Task>,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let options = Options::from_args();

    let tasks = if options.tasks.is_empty() {
        SAMPLE
            .iter()
            .map(|&(name, priority)| Task {
                name: name.to_owned(),
                priority,
            })
            .collect()
    } else {
        options.tasks
    };

    let config = Config::default()
        .direction(options.order)
        .tie_break(options.tie_break)
        .capacity(tasks.len());
    let mut queue = Queue::with_config(ByKey::new(|t: &Task| t.priority), config);
    info!("scheduling {} tasks", tasks.len());
    queue.extend(tasks);

    while !queue.is_empty() {
        let task = queue.extract()?;
        println!("task:{}{}", task.name, task.priority);
    }
    Ok(())
}
