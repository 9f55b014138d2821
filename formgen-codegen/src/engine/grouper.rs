//! Section grouping.
//!
//! A left-to-right fold over already-filtered members that opens a group at
//! every section-tagged member and closes the previous one. Groups never
//! nest.

use crate::ir::{MemberSpec, Node};

/// Fold state of one grouping pass.
#[derive(Debug, Default)]
pub struct SectionGrouper {
    in_section: bool,
    nodes: Vec<Node>,
}

impl SectionGrouper {
    /// Group `members`, resolving each through `resolve`.
    ///
    /// `title` formats explicit section titles, typically into
    /// `<ArtifactName>.<title>`.
    pub fn group<'m, I, T, R>(members: I, title: T, mut resolve: R) -> Vec<Node>
    where
        I: IntoIterator<Item = &'m MemberSpec>,
        T: Fn(&str) -> String,
        R: FnMut(&MemberSpec) -> Vec<Node>,
    {
        let mut grouper = Self::default();
        for member in members {
            grouper.push(member, &title, &mut resolve);
        }
        grouper.finish()
    }

    fn push<T, R>(&mut self, member: &MemberSpec, title: &T, resolve: &mut R)
    where
        T: Fn(&str) -> String,
        R: FnMut(&MemberSpec) -> Vec<Node>,
    {
        if member.starts_section() {
            if self.in_section {
                self.nodes.push(Node::GroupClose);
            }
            self.nodes.push(Node::GroupOpen {
                title: member.section_title().map(title),
            });
            self.in_section = true;
        }
        self.nodes.extend(resolve(member));
    }

    fn finish(mut self) -> Vec<Node> {
        if self.in_section {
            self.nodes.push(Node::GroupClose);
        }
        self.nodes
    }
}
