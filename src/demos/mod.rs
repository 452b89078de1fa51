use crate::{network::WeightedGraph, shortest_path::shortest_path};

pub mod hierarchy;
pub mod layout;
pub mod route;
pub mod scheduler;

use hierarchy::TrackNode;
use layout::TrackLayout;
use route::TrainRoute;
use scheduler::TrainScheduler;

pub fn run() {
    println!("=== Railway Graph ===");
    let mut graph = WeightedGraph::new();
    graph.add_track("A", "B", 5);
    graph.add_track("B", "C", 4);
    graph.add_track("A", "C", 10);
    match shortest_path(&graph, &"A".into(), &"C".into()) {
        Some(distance) => println!("Shortest path A to C: {distance}"),
        None => println!("Shortest path A to C: unreachable"),
    }

    println!("\n=== Train Route (Linked List) ===");
    let mut route = TrainRoute::new();
    for segment in ["Segment1", "Segment2", "Segment3"] {
        route.add_segment(segment);
    }
    println!("{route}");

    println!("\n=== Track Layout (Array) ===");
    let layout = TrackLayout::new(["straight", "curve", "bridge"]);
    match layout.search("curve") {
        Some(idx) => println!("'curve' found at index: {idx}"),
        None => println!("'curve' not found"),
    }

    println!("\n=== Track Hierarchy (Tree) ===");
    let mut root = TrackNode::new("MainTrack");
    let mut branch1 = TrackNode::new("Branch1");
    branch1.add_branch(TrackNode::new("SubBranch1"));
    root.add_branch(branch1);
    root.add_branch(TrackNode::new("Branch2"));
    print!("{root}");

    println!("\n=== Train Scheduler (Stack and Queue) ===");
    let mut scheduler = TrainScheduler::new();
    for train_id in ["TrainA", "TrainB", "TrainC"] {
        scheduler.arrive_train(train_id);
    }
    println!(
        "LIFO Departure (Stack): {}",
        scheduler.depart_stack().as_deref().unwrap_or("none")
    );
    println!(
        "FIFO Departure (Queue): {}",
        scheduler.depart_queue().as_deref().unwrap_or("none")
    );
}
