use std::collections::VecDeque;

/// Every arrival is recorded on both a stack and a queue, which then drain
/// independently.
#[derive(Debug, Default)]
pub struct TrainScheduler {
    stack: Vec<String>,
    queue: VecDeque<String>,
}

impl TrainScheduler {
    pub fn new() -> Self {
        Default::default()
    }

    pub fn arrive_train(&mut self, train_id: impl Into<String>) {
        let train_id = train_id.into();
        self.stack.push(train_id.clone());
        self.queue.push_back(train_id);
    }

    pub fn depart_stack(&mut self) -> Option<String> {
        self.stack.pop()
    }

    pub fn depart_queue(&mut self) -> Option<String> {
        self.queue.pop_front()
    }
}
