//! RDF term and triple data model.
//!
//! Nodes intern their lexical content behind `Arc<str>` so that triples can
//! be cloned freely across union-graph traversals without copying IRI text.
//! Equality and hashing are structural; blank nodes compare by label, with
//! `BlankId::fresh()` guaranteeing process-unique labels.

use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use ontograph_vocab::{rdf, xsd};

static NEXT_BLANK: AtomicU64 = AtomicU64::new(0);

/// Blank node identifier.
///
/// Labels produced by [`BlankId::fresh`] are unique within the process.
/// Labels supplied via [`BlankId::labeled`] are caller-scoped (e.g. parser
/// scoped) and compare structurally.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct BlankId(Arc<str>);

impl BlankId {
    /// Mint a process-unique blank node id.
    pub fn fresh() -> Self {
        let n = NEXT_BLANK.fetch_add(1, Ordering::Relaxed);
        BlankId(Arc::from(format!("b{}", n)))
    }

    /// Blank node id with an explicit label.
    pub fn labeled(label: impl AsRef<str>) -> Self {
        BlankId(Arc::from(label.as_ref()))
    }

    /// The label, without the `_:` sigil.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for BlankId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "_:{}", self.0)
    }
}

/// RDF literal: lexical form plus datatype IRI, with an optional language
/// tag (language-tagged literals carry the `rdf:langString` datatype).
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Literal {
    pub lexical: Arc<str>,
    pub datatype: Arc<str>,
    pub lang: Option<Arc<str>>,
}

impl fmt::Display for Literal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "\"{}\"", self.lexical)?;
        if let Some(lang) = &self.lang {
            write!(f, "@{}", lang)
        } else if &*self.datatype != xsd::STRING {
            write!(f, "^^<{}>", self.datatype)
        } else {
            Ok(())
        }
    }
}

/// An RDF node: IRI, blank node, or literal.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Node {
    Iri(Arc<str>),
    Blank(BlankId),
    Literal(Literal),
}

impl Node {
    /// IRI node.
    pub fn iri(iri: impl AsRef<str>) -> Self {
        Node::Iri(Arc::from(iri.as_ref()))
    }

    /// Fresh anonymous blank node.
    pub fn blank() -> Self {
        Node::Blank(BlankId::fresh())
    }

    /// Blank node with an explicit label.
    pub fn blank_labeled(label: impl AsRef<str>) -> Self {
        Node::Blank(BlankId::labeled(label))
    }

    /// Plain string literal (`xsd:string`).
    pub fn literal(lexical: impl AsRef<str>) -> Self {
        Node::Literal(Literal {
            lexical: Arc::from(lexical.as_ref()),
            datatype: Arc::from(xsd::STRING),
            lang: None,
        })
    }

    /// Literal with an explicit datatype IRI.
    pub fn typed_literal(lexical: impl AsRef<str>, datatype: impl AsRef<str>) -> Self {
        Node::Literal(Literal {
            lexical: Arc::from(lexical.as_ref()),
            datatype: Arc::from(datatype.as_ref()),
            lang: None,
        })
    }

    /// Language-tagged literal (`rdf:langString`).
    pub fn lang_literal(lexical: impl AsRef<str>, lang: impl AsRef<str>) -> Self {
        Node::Literal(Literal {
            lexical: Arc::from(lexical.as_ref()),
            datatype: Arc::from(rdf::LANG_STRING),
            lang: Some(Arc::from(lang.as_ref())),
        })
    }

    pub fn is_iri(&self) -> bool {
        matches!(self, Node::Iri(_))
    }

    pub fn is_blank(&self) -> bool {
        matches!(self, Node::Blank(_))
    }

    pub fn is_literal(&self) -> bool {
        matches!(self, Node::Literal(_))
    }

    /// The IRI string, if this node is an IRI.
    pub fn as_iri(&self) -> Option<&str> {
        match self {
            Node::Iri(iri) => Some(iri),
            _ => None,
        }
    }

    /// The literal, if this node is one.
    pub fn as_literal(&self) -> Option<&Literal> {
        match self {
            Node::Literal(lit) => Some(lit),
            _ => None,
        }
    }
}

impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Node::Iri(iri) => write!(f, "<{}>", iri),
            Node::Blank(b) => write!(f, "{}", b),
            Node::Literal(lit) => write!(f, "{}", lit),
        }
    }
}

/// A single RDF statement.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Triple {
    pub s: Node,
    pub p: Node,
    pub o: Node,
}

impl Triple {
    pub fn new(s: Node, p: Node, o: Node) -> Self {
        Triple { s, p, o }
    }
}

impl fmt::Display for Triple {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {} .", self.s, self.p, self.o)
    }
}

/// Match pattern over triples. `None` in a position matches any node.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TriplePattern {
    pub s: Option<Node>,
    pub p: Option<Node>,
    pub o: Option<Node>,
}

impl TriplePattern {
    /// Matches every triple.
    pub const ANY: TriplePattern = TriplePattern {
        s: None,
        p: None,
        o: None,
    };

    pub fn new(s: Option<Node>, p: Option<Node>, o: Option<Node>) -> Self {
        TriplePattern { s, p, o }
    }

    /// Pattern matching exactly one triple.
    pub fn of_triple(t: &Triple) -> Self {
        TriplePattern {
            s: Some(t.s.clone()),
            p: Some(t.p.clone()),
            o: Some(t.o.clone()),
        }
    }

    pub fn with_s(mut self, s: Node) -> Self {
        self.s = Some(s);
        self
    }

    pub fn with_p(mut self, p: Node) -> Self {
        self.p = Some(p);
        self
    }

    pub fn with_o(mut self, o: Node) -> Self {
        self.o = Some(o);
        self
    }

    /// True when every bound position equals the triple's node.
    pub fn matches(&self, t: &Triple) -> bool {
        self.s.as_ref().map_or(true, |s| *s == t.s)
            && self.p.as_ref().map_or(true, |p| *p == t.p)
            && self.o.as_ref().map_or(true, |o| *o == t.o)
    }
}
