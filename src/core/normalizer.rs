use std::collections::{BTreeSet, HashMap};

/// A group of interchangeable skill names
///
/// `aliases` are alternative spellings of `canonical` (abbreviations,
/// version suffixes, `.js` suffixes) and collapse onto it. `related` terms
/// are broader descriptive words that belong to the cluster's variant set
/// but keep their own canonical form, so they only ever produce partial
/// matches.
#[derive(Debug, Clone, Copy)]
pub struct SynonymCluster {
    pub canonical: &'static str,
    pub aliases: &'static [&'static str],
    pub related: &'static [&'static str],
}

/// Built-in synonym clusters
pub const DEFAULT_CLUSTERS: &[SynonymCluster] = &[
    SynonymCluster { canonical: "javascript", aliases: &["js"], related: &[] },
    SynonymCluster { canonical: "typescript", aliases: &["ts"], related: &[] },
    SynonymCluster { canonical: "python", aliases: &["py"], related: &[] },
    SynonymCluster { canonical: "react", aliases: &["reactjs", "react.js"], related: &[] },
    SynonymCluster { canonical: "node.js", aliases: &["node", "nodejs"], related: &[] },
    SynonymCluster { canonical: "css", aliases: &["css3"], related: &["styling"] },
    SynonymCluster { canonical: "html", aliases: &["html5"], related: &["markup"] },
    SynonymCluster {
        canonical: "machine learning",
        aliases: &["ml", "ai"],
        related: &["artificial intelligence"],
    },
];

#[derive(Debug, Clone)]
struct Entry {
    canonical: Option<String>,
    cluster: usize,
}

/// Immutable lookup from skill tokens to their synonym cluster
#[derive(Debug, Clone)]
pub struct SynonymTable {
    entries: HashMap<String, Entry>,
    variants: Vec<BTreeSet<String>>,
}

impl SynonymTable {
    pub fn new(clusters: &[SynonymCluster]) -> Self {
        let mut entries = HashMap::new();
        let mut variants = Vec::with_capacity(clusters.len());

        for (idx, cluster) in clusters.iter().enumerate() {
            let canonical = clean(cluster.canonical);
            let mut members = BTreeSet::new();
            members.insert(canonical.clone());

            for alias in cluster.aliases {
                let alias = clean(alias);
                members.insert(alias.clone());
                entries.insert(alias, Entry { canonical: Some(canonical.clone()), cluster: idx });
            }
            for term in cluster.related {
                let term = clean(term);
                members.insert(term.clone());
                entries.insert(term, Entry { canonical: None, cluster: idx });
            }
            entries.insert(canonical.clone(), Entry { canonical: Some(canonical), cluster: idx });

            variants.push(members);
        }

        Self { entries, variants }
    }
}

impl Default for SynonymTable {
    fn default() -> Self {
        Self::new(DEFAULT_CLUSTERS)
    }
}

#[inline]
fn clean(token: &str) -> String {
    token.trim().to_lowercase()
}

/// Canonicalizes free-text skill tokens
#[derive(Debug, Clone, Default)]
pub struct SkillNormalizer {
    table: SynonymTable,
}

impl SkillNormalizer {
    pub fn new(table: SynonymTable) -> Self {
        Self { table }
    }

    /// Lowercased, trimmed form; aliases collapse onto their cluster's canonical name
    pub fn normalize(&self, token: &str) -> String {
        let cleaned = clean(token);
        match self.table.entries.get(&cleaned) {
            Some(Entry { canonical: Some(canonical), .. }) => canonical.clone(),
            _ => cleaned,
        }
    }

    /// All interchangeable forms of a token. Never empty.
    pub fn variants(&self, token: &str) -> BTreeSet<String> {
        let cleaned = clean(token);
        match self.table.entries.get(&cleaned) {
            Some(entry) => self.table.variants[entry.cluster].clone(),
            None => BTreeSet::from([cleaned]),
        }
    }

    /// Whether two tokens share at least one variant
    pub fn related(&self, a: &str, b: &str) -> bool {
        let left = self.variants(a);
        let right = self.variants(b);
        !left.is_disjoint(&right)
    }
}
