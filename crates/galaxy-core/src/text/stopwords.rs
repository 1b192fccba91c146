/// Common English words plus words that are noise in an idea journal
pub(super) const ENGLISH: &[&str] = &[
    // articles, conjunctions, prepositions
    "a", "an", "the", "and", "or", "but", "nor", "so", "yet", "for", "of", "in", "on", "at",
    "to", "by", "as", "if", "into", "onto", "from", "with", "without", "within", "about",
    "above", "below", "over", "under", "after", "before", "between", "through", "during",
    "against", "among", "around", "upon", "via", "until", "while", "because", "than", "then",
    "off", "out", "up", "down",
    // pronouns and determiners
    "i", "me", "my", "mine", "myself", "we", "us", "our", "ours", "ourselves", "you", "your",
    "yours", "yourself", "yourselves", "he", "him", "his", "himself", "she", "her", "hers",
    "herself", "it", "its", "itself", "they", "them", "their", "theirs", "themselves", "this",
    "that", "these", "those", "who", "whom", "whose", "which", "what", "each", "every", "all",
    "any", "both", "few", "more", "most", "other", "some", "such", "own", "same", "another",
    // auxiliaries and common verbs
    "am", "is", "are", "was", "were", "be", "been", "being", "have", "has", "had", "having",
    "do", "does", "did", "doing", "done", "will", "would", "shall", "should", "can", "could",
    "may", "might", "must", "get", "got", "make", "made", "let", "lets",
    // adverbs and fillers
    "not", "no", "only", "very", "too", "just", "also", "again", "further", "once", "here",
    "there", "when", "where", "why", "how", "now", "still", "even", "much", "many", "well",
    "really", "etc",
    // domain noise
    "idea", "ideas", "thing", "things", "something", "anything", "maybe", "like", "want",
    "need",
];
