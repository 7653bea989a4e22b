use core::fmt;

use serde::ser::{Serialize, SerializeMap, Serializer};

/// Marker used in place of forms which a class does not have.
pub const UNAVAILABLE: &str = "N/A";

macro_rules! categories {
    (
        $(#[$($meta:meta)*])*
        $vis:vis enum $name:ident {
            $($variant:ident $ident:literal $title:literal,)*
        }
    ) => {
        $(#[$($meta)*])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
        #[non_exhaustive]
        $vis enum $name {
            $(
                #[doc = $title]
                $variant,
            )*
        }

        impl $name {
            /// Every category.
            $vis const VALUES: &'static [$name] = &[$($name::$variant,)*];

            /// Key of the category as it appears in serialized output.
            $vis fn name(&self) -> &'static str {
                match self {
                    $($name::$variant => $ident,)*
                }
            }

            /// Human readable title of the category.
            $vis fn title(&self) -> &'static str {
                match self {
                    $($name::$variant => $title,)*
                }
            }
        }
    }
}

categories! {
    /// A key in a conjugation tree.
    pub enum Category {
        Stem "stem" "Stem",
        NegativeStem "negative_stem" "Negative stem",
        Base "base" "Base",
        TeForm "te_form" "Te-form",
        TaForm "ta_form" "Ta-form",
        PoliteForms "polite_forms" "Polite forms",
        NegativePlainForms "negative_plain_forms" "Negative plain forms",
        ContinuousForms "continuous_forms" "Continuous forms",
        Prohibitive "prohibitive" "Prohibitive",
        PlainPresentPotential "plain_present_potential" "Plain present potential",
        Conditional "conditional" "Conditional",
        Imperative "imperative" "Imperative",
        Volitional "volitional" "Volitional",
        PassiveDictionaryForm "passive_dictionary_form" "Passive dictionary form",
        PassiveForms "passive_forms" "Passive forms",
        CausativeDictionaryForm "causative_dictionary_form" "Causative dictionary form",
        CausativeForms "causative_forms" "Causative forms",
        CausativePassiveDictionaryForm "causative_passive_dictionary_form" "Causative passive dictionary form",
        CausativePassiveForms "causative_passive_forms" "Causative passive forms",
        Present "present" "Present",
        Past "past" "Past",
        PresentNegative "present_negative" "Present negative",
        PastNegative "past_negative" "Past negative",
        PresentSpoken "present_spoken" "Present (spoken)",
        PresentWritten "present_written" "Present (written)",
        PresentFormal "present_formal" "Present (formal)",
        PresentFormalSpoken "present_formal_spoken" "Present (formal, spoken)",
        PastSpoken "past_spoken" "Past (spoken)",
        PastWritten "past_written" "Past (written)",
        PastFormal "past_formal" "Past (formal)",
        PastFormalSpoken "past_formal_spoken" "Past (formal, spoken)",
        TeFormSpoken "te_form_spoken" "Te-form (spoken)",
        TeFormWritten "te_form_written" "Te-form (written)",
        TeFormFormal "te_form_formal" "Te-form (formal)",
        TeFormFormalSpoken "te_form_formal_spoken" "Te-form (formal, spoken)",
        NegativeTeFormSpoken "negative_te_form_spoken" "Negative te-form (spoken)",
        NegativeTeFormWritten "negative_te_form_written" "Negative te-form (written)",
        Copula "copula" "Copula",
        AdjectiveBase "adjective_base" "Adjective base",
        AdverbialForm "adverbial_form" "Adverbial form",
        NegativeAdjectiveForms "negative_adjective_forms" "Negative adjective forms",
        AdjectiveConjugations "adjective_conjugations" "Adjective conjugations",
        PresentPolite "present_polite" "Present (polite)",
        PastPolite "past_polite" "Past (polite)",
        PresentHonorific "present_honorific" "Present (honorific)",
        PastHonorific "past_honorific" "Past (honorific)",
        TeFormPolite "te_form_polite" "Te-form (polite)",
        TeFormHonorific "te_form_honorific" "Te-form (honorific)",
        VolitionalPolite "volitional_polite" "Volitional (polite)",
        VolitionalFormal "volitional_formal" "Volitional (formal)",
        VolitionalHonorific "volitional_honorific" "Volitional (honorific)",
        ContinuousFormal "continuous_formal" "Continuous (formal)",
    }
}

impl Category {
    /// Test if the category holds a voice derivation.
    pub fn is_voice(&self) -> bool {
        matches!(
            self,
            Category::PassiveDictionaryForm
                | Category::PassiveForms
                | Category::CausativeDictionaryForm
                | Category::CausativeForms
                | Category::CausativePassiveDictionaryForm
                | Category::CausativePassiveForms
        )
    }
}

impl fmt::Display for Category {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.name().fmt(f)
    }
}

impl Serialize for Category {
    #[inline]
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.name())
    }
}

/// A single value in a conjugation tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node<T> {
    /// A conjugated form.
    Form(T),
    /// The form does not exist for the class.
    Unavailable,
    /// A nested group of forms.
    Branch(Tree<T>),
}

impl<T> Node<T> {
    /// Access the form, if this is a form.
    pub fn as_form(&self) -> Option<&T> {
        match self {
            Node::Form(value) => Some(value),
            _ => None,
        }
    }

    /// Access the nested tree, if this is a branch.
    pub fn as_branch(&self) -> Option<&Tree<T>> {
        match self {
            Node::Branch(tree) => Some(tree),
            _ => None,
        }
    }
}

impl<T> Serialize for Node<T>
where
    T: Serialize,
{
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            Node::Form(value) => value.serialize(serializer),
            Node::Unavailable => serializer.serialize_str(UNAVAILABLE),
            Node::Branch(tree) => tree.serialize(serializer),
        }
    }
}

/// An insertion ordered mapping from categories to forms.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tree<T> {
    entries: Vec<(Category, Node<T>)>,
}

/// A conjugation tree in a single script.
pub type ConjugationTree = Tree<String>;

impl<T> Tree<T> {
    /// Construct a new empty tree.
    pub const fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Insert a node, replacing any existing node with the same key in place.
    pub(crate) fn push(&mut self, category: Category, node: Node<T>) {
        match self.entries.iter_mut().find(|(c, _)| *c == category) {
            Some((_, existing)) => *existing = node,
            None => self.entries.push((category, node)),
        }
    }

    /// Insert a form.
    pub(crate) fn insert(&mut self, category: Category, value: T) {
        self.push(category, Node::Form(value));
    }

    /// Insert a form if present, else mark it as unavailable.
    pub(crate) fn insert_or_unavailable(&mut self, category: Category, value: Option<T>) {
        match value {
            Some(value) => self.insert(category, value),
            None => self.push(category, Node::Unavailable),
        }
    }

    /// Insert a nested tree.
    pub(crate) fn insert_branch(&mut self, category: Category, tree: Tree<T>) {
        self.push(category, Node::Branch(tree));
    }

    /// Number of entries at the top level.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Test if the tree is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Get the node directly under the given category.
    pub fn get(&self, category: Category) -> Option<&Node<T>> {
        self.entries
            .iter()
            .find(|(c, _)| *c == category)
            .map(|(_, node)| node)
    }

    /// Walk the tree along the given path.
    pub fn lookup(&self, path: &[Category]) -> Option<&Node<T>> {
        let (first, rest) = path.split_first()?;
        let node = self.get(*first)?;

        if rest.is_empty() {
            return Some(node);
        }

        node.as_branch()?.lookup(rest)
    }

    /// Iterate over the top level entries in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (Category, &Node<T>)> + '_ {
        self.entries.iter().map(|(c, node)| (*c, node))
    }

    /// Top level keys in insertion order.
    pub fn keys(&self) -> impl Iterator<Item = Category> + '_ {
        self.entries.iter().map(|(c, _)| *c)
    }

    /// Every path leading to a leaf, depth first.
    pub fn paths(&self) -> Vec<Vec<Category>> {
        let mut out = Vec::new();
        self.collect_paths(&mut Vec::new(), &mut out);
        out
    }

    fn collect_paths(&self, prefix: &mut Vec<Category>, out: &mut Vec<Vec<Category>>) {
        for (category, node) in &self.entries {
            prefix.push(*category);

            match node {
                Node::Branch(tree) => tree.collect_paths(prefix, out),
                _ => out.push(prefix.clone()),
            }

            prefix.pop();
        }
    }

    /// Project every form in the tree through `f`, keeping the structure.
    pub fn map<U, F>(&self, mut f: F) -> Tree<U>
    where
        F: FnMut(&T) -> U,
    {
        self.map_inner(&mut f)
    }

    fn map_inner<U, F>(&self, f: &mut F) -> Tree<U>
    where
        F: FnMut(&T) -> U,
    {
        let entries = self
            .entries
            .iter()
            .map(|(category, node)| {
                let node = match node {
                    Node::Form(value) => Node::Form(f(value)),
                    Node::Unavailable => Node::Unavailable,
                    Node::Branch(tree) => Node::Branch(tree.map_inner(f)),
                };

                (*category, node)
            })
            .collect();

        Tree { entries }
    }

    /// Keep only the top level entries matching the predicate.
    pub(crate) fn retain<F>(&mut self, mut f: F)
    where
        F: FnMut(Category) -> bool,
    {
        self.entries.retain(|(c, _)| f(*c));
    }
}

impl Tree<String> {
    /// Get the string value at the given path.
    ///
    /// Unavailable forms are returned as [`UNAVAILABLE`].
    pub fn value(&self, path: &[Category]) -> Option<&str> {
        match self.lookup(path)? {
            Node::Form(value) => Some(value.as_str()),
            Node::Unavailable => Some(UNAVAILABLE),
            Node::Branch(..) => None,
        }
    }
}

impl<T> Default for Tree<T> {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Serialize for Tree<T>
where
    T: Serialize,
{
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;

        for (category, node) in &self.entries {
            map.serialize_entry(category, node)?;
        }

        map.end()
    }
}
