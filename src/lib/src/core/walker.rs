//! Depth first walk over a remote folder, printing one row per entry
//!

use std::collections::VecDeque;
use std::io::Write;

use crate::api::RemoteStore;
use crate::core::{PagePrompt, Pager, Printer, RenderContext};
use crate::error::DriveError;
use crate::model::Entry;
use crate::opts::ListOpts;

/// How a walk over one root ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Walk {
    /// Every page of every level was listed
    Completed,
    /// Called with a depth of 0, nothing listed
    DepthExhausted,
    /// The user answered "q" at a page prompt
    Quit,
}

impl Walk {
    pub fn is_completed(&self) -> bool {
        matches!(self, Walk::Completed)
    }
}

// One level of the walk, the explicit stand-in for a recursive call
struct Frame {
    parent_name: String,
    depth: i32,
    pager: Pager,
    pending: VecDeque<Entry>,
}

impl Frame {
    fn new(parent_id: &str, parent_name: String, depth: i32, page_size: usize) -> Frame {
        Frame {
            parent_name,
            depth,
            pager: Pager::new(parent_id, page_size),
            pending: VecDeque::new(),
        }
    }
}

/// Budget for the children of a level walked with `depth`, negative never runs out
fn descend(depth: i32) -> i32 {
    if depth > 0 {
        depth - 1
    } else {
        depth
    }
}

pub struct TreeWalker<'a> {
    remote: &'a dyn RemoteStore,
    prompt: &'a mut dyn PagePrompt,
    out: &'a mut (dyn Write + Send),
    printer: Printer,
    page_size: usize,
    human: bool,
}

impl<'a> TreeWalker<'a> {
    pub fn new(
        remote: &'a dyn RemoteStore,
        prompt: &'a mut dyn PagePrompt,
        out: &'a mut (dyn Write + Send),
        opts: &ListOpts,
    ) -> TreeWalker<'a> {
        TreeWalker {
            remote,
            prompt,
            out,
            printer: Printer::new(),
            page_size: opts.page_size,
            human: opts.human,
        }
    }

    /// Walks the children of `parent_id`, `parent_name` prefixes every printed path.
    ///
    /// Children are printed in page order and each folder is walked right after
    /// its row. Leaf files are never listed. Between pages of the same level the
    /// prompt decides whether to go on. A failed page fetch ends the walk with
    /// the fetch error.
    pub async fn walk(
        &mut self,
        parent_id: &str,
        parent_name: &str,
        depth: i32,
    ) -> Result<Walk, DriveError> {
        if depth == 0 {
            return Ok(Walk::DepthExhausted);
        }

        let mut stack = vec![Frame::new(
            parent_id,
            parent_name.to_string(),
            depth,
            self.page_size,
        )];

        while let Some(frame) = stack.last_mut() {
            if let Some(entry) = frame.pending.pop_front() {
                let context = RenderContext {
                    human: self.human,
                    parent: &frame.parent_name,
                };
                self.printer.pretty(&entry, &context, &mut *self.out)?;

                let child_depth = descend(frame.depth);
                if entry.is_dir && child_depth != 0 {
                    let child_name = entry.path_under(&frame.parent_name);
                    stack.push(Frame::new(&entry.id, child_name, child_depth, self.page_size));
                }
                continue;
            }

            if !frame.pager.has_next() {
                stack.pop();
                continue;
            }

            if !frame.pager.is_first_page() && !self.prompt.next_page(&mut *self.out)? {
                log::debug!("walk stopped by user under {}", frame.parent_name);
                return Ok(Walk::Quit);
            }

            if let Some(entries) = frame.pager.next_page(self.remote).await? {
                frame.pending.extend(entries);
            }
        }

        Ok(Walk::Completed)
    }
}
