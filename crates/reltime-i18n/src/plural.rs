//! Plural rule table
//!
//! Each language family maps a count to the index of the grammatical form that
//! must be used for it. Translation lists are addressed by that index, so a
//! rule's `forms` also tells how many templates a complete list has.
//!
//! The built-in ids below are part of the wire format: servers send them in
//! page data, so they must never be renumbered.

use std::fmt;

/// CLDR plural category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PluralCategory {
	Zero,
	One,
	Two,
	Few,
	Many,
	Other,
}

/// Pure function selecting a form index for a count
pub type PluralSelector = fn(u64) -> usize;

/// Identifier of a rule inside a [`PluralRuleTable`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
#[derive(serde::Serialize, serde::Deserialize)]
#[serde(transparent)]
pub struct PluralRuleId(pub usize);

impl PluralRuleId {
	pub const DEFAULT: Self = Self(0);
	pub const BENGALI: Self = Self(1);
	pub const ICELANDIC: Self = Self(2);
	pub const FILIPINO: Self = Self(3);
	pub const ONE_FORM: Self = Self(4);
	pub const CZECH: Self = Self(5);
	pub const RUSSIAN: Self = Self(6);
	pub const POLISH: Self = Self(7);
	pub const LATVIAN: Self = Self(8);
	pub const LITHUANIAN: Self = Self(9);
	pub const FRENCH: Self = Self(10);
	pub const CATALAN: Self = Self(11);
	pub const SLOVENIAN: Self = Self(12);
	pub const ARABIC: Self = Self(13);
}

impl fmt::Display for PluralRuleId {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "{}", self.0)
	}
}

/// A single language family's plural grammar
#[derive(Clone, Copy)]
pub struct PluralRule {
	name: &'static str,
	forms: &'static [PluralCategory],
	select: PluralSelector,
}

impl PluralRule {
	/// Create a rule from its categories and selector.
	///
	/// The selector must return an index below `forms.len()` for every count.
	pub const fn new(
		name: &'static str,
		forms: &'static [PluralCategory],
		select: PluralSelector,
	) -> Self {
		Self {
			name,
			forms,
			select,
		}
	}

	pub fn name(&self) -> &'static str {
		self.name
	}

	/// Categories used by this language, in form-index order
	pub fn forms(&self) -> &'static [PluralCategory] {
		self.forms
	}

	/// Number of templates a complete translation list needs
	pub fn form_count(&self) -> usize {
		self.forms.len()
	}

	/// Form index for `n`
	pub fn select(&self, n: u64) -> usize {
		(self.select)(n)
	}

	/// CLDR category for `n`
	pub fn category(&self, n: u64) -> PluralCategory {
		self.forms[self.select(n)]
	}
}

impl fmt::Debug for PluralRule {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("PluralRule")
			.field("name", &self.name)
			.field("forms", &self.forms)
			.finish()
	}
}

use PluralCategory::{Few, Many, One, Other, Two, Zero};

const BUILTIN_RULES: [PluralRule; 14] = [
	// Common 2-form, e.g. English, German
	PluralRule::new("default", &[One, Other], |n| if n != 1 { 1 } else { 0 }),
	PluralRule::new("bengali", &[One, Other], |n| if n > 1 { 1 } else { 0 }),
	PluralRule::new("icelandic", &[One, Other], |n| {
		if n % 10 != 1 || n % 100 == 11 { 1 } else { 0 }
	}),
	PluralRule::new("filipino", &[One, Other], |n| {
		if n != 1 && n != 2 && n != 3 && matches!(n % 10, 4 | 6 | 9) {
			1
		} else {
			0
		}
	}),
	PluralRule::new("one-form", &[Other], |_| 0),
	// form 0: n==1, form 1: n in 2..=4, form 2: everything else
	PluralRule::new("czech", &[One, Few, Other], |n| {
		if n == 1 {
			0
		} else if (2..=4).contains(&n) {
			1
		} else {
			2
		}
	}),
	// form 0: n%10==1 && n%100!=11
	// form 1: n%10 in 2..=4 && (n%100<10 || n%100>=20)
	PluralRule::new("russian", &[One, Few, Many], |n| {
		let n10 = n % 10;
		let n100 = n % 100;
		if n10 == 1 && n100 != 11 {
			0
		} else if (2..=4).contains(&n10) && !(10..20).contains(&n100) {
			1
		} else {
			2
		}
	}),
	PluralRule::new("polish", &[One, Few, Other], |n| {
		let n10 = n % 10;
		let n100 = n % 100;
		if n == 1 {
			0
		} else if (2..=4).contains(&n10) && !(10..20).contains(&n100) {
			1
		} else {
			2
		}
	}),
	// form 0 doubles as the "zero" form: n%10==0 or a teen
	PluralRule::new("latvian", &[Zero, One, Other], |n| {
		let n100 = n % 100;
		if n % 10 == 0 || (11..=19).contains(&n100) {
			0
		} else if n % 10 == 1 && n100 != 11 {
			1
		} else {
			2
		}
	}),
	PluralRule::new("lithuanian", &[One, Few, Many], |n| {
		let n10 = n % 10;
		let teen = (11..=19).contains(&(n % 100));
		if n10 == 1 && !teen {
			0
		} else if n10 >= 2 && !teen {
			1
		} else {
			2
		}
	}),
	PluralRule::new("french", &[One, Many, Other], |n| {
		if n <= 1 {
			0
		} else if n % 1_000_000 == 0 {
			1
		} else {
			2
		}
	}),
	PluralRule::new("catalan", &[One, Many, Other], |n| {
		if n == 1 {
			0
		} else if n != 0 && n % 1_000_000 == 0 {
			1
		} else {
			2
		}
	}),
	PluralRule::new("slovenian", &[One, Two, Few, Other], |n| match n % 100 {
		1 => 0,
		2 => 1,
		3 | 4 => 2,
		_ => 3,
	}),
	// form 5: n>=100 with n%100 in 0..=2
	PluralRule::new("arabic", &[Zero, One, Two, Few, Many, Other], |n| {
		let n100 = n % 100;
		match n {
			0 => 0,
			1 => 1,
			2 => 2,
			_ if (3..=10).contains(&n100) => 3,
			_ if n100 >= 11 => 4,
			_ => 5,
		}
	}),
];

/// Ordered, immutable list of plural rules
///
/// # Example
///
/// ```
/// use reltime_i18n::{PluralRuleId, PluralRuleTable};
///
/// let table = PluralRuleTable::builtin();
/// assert_eq!(table.select_form(PluralRuleId::DEFAULT, 1), 0);
/// assert_eq!(table.select_form(PluralRuleId::RUSSIAN, 22), 1);
/// ```
#[derive(Debug, Clone)]
pub struct PluralRuleTable {
	rules: Vec<PluralRule>,
}

impl Default for PluralRuleTable {
	fn default() -> Self {
		Self::builtin()
	}
}

impl PluralRuleTable {
	/// The 14 built-in language families
	pub fn builtin() -> Self {
		Self {
			rules: BUILTIN_RULES.to_vec(),
		}
	}

	/// Build a table from an explicit rule list
	pub fn from_rules(rules: Vec<PluralRule>) -> Self {
		Self { rules }
	}

	/// Append a rule, returning the table and the id it was assigned
	pub fn with_rule(mut self, rule: PluralRule) -> (Self, PluralRuleId) {
		let id = PluralRuleId(self.rules.len());
		self.rules.push(rule);
		(self, id)
	}

	pub fn get(&self, id: PluralRuleId) -> Option<&PluralRule> {
		self.rules.get(id.0)
	}

	pub fn contains(&self, id: PluralRuleId) -> bool {
		id.0 < self.rules.len()
	}

	pub fn len(&self) -> usize {
		self.rules.len()
	}

	pub fn is_empty(&self) -> bool {
		self.rules.is_empty()
	}

	pub fn iter(&self) -> impl Iterator<Item = (PluralRuleId, &PluralRule)> {
		self.rules
			.iter()
			.enumerate()
			.map(|(i, rule)| (PluralRuleId(i), rule))
	}

	/// Form index for `n` under rule `id`
	///
	/// Unknown ids are a configuration error; they are logged and treated as
	/// the common two-form rule so rendering keeps working.
	pub fn select_form(&self, id: PluralRuleId, n: u64) -> usize {
		match self.get(id) {
			Some(rule) => rule.select(n),
			None => {
				tracing::error!(rule = %id, "unknown plural rule, using default");
				BUILTIN_RULES[0].select(n)
			}
		}
	}
}

/// Languages per plural rule, by primary subtag
const LANGUAGE_RULES: &[(PluralRuleId, &[&str])] = &[
	(
		PluralRuleId::DEFAULT,
		&[
			"en", "aa", "ab", "abr", "ada", "ae", "aeb", "af", "afh", "aii", "ain", "akk", "ale",
			"aln", "alt", "ami", "an", "ang", "anp", "apc", "arc", "arp", "arq", "arw", "arz",
			"asa", "ast", "av", "avk", "awa", "ayc", "az", "azb", "ba", "bal", "ban", "bar", "bas",
			"bbc", "bci", "bej", "bem", "ber", "bew", "bez", "bg", "bgc", "bgn", "bhb", "bhi", "bi",
			"bik", "bin", "bjj", "bjn", "bla", "bnt", "bqi", "bra", "brb", "brh", "brx", "bua",
			"bug", "bum", "byn", "cad", "cak", "car", "ce", "cgg", "ch", "chb", "chg", "chk", "chm",
			"chn", "cho", "chp", "chr", "chy", "ckb", "co", "cop", "cpe", "cpf", "cr", "crp", "cu",
			"cv", "da", "dak", "dar", "dcc", "de", "del", "den", "dgr", "din", "dje", "dnj", "dnk",
			"dru", "dry", "dua", "dum", "dv", "dyu", "ee", "efi", "egl", "egy", "eka", "el", "elx",
			"enm", "eo", "et", "eu", "ewo", "ext", "fan", "fat", "fbl", "ffm", "fi", "fj", "fo",
			"fon", "frk", "frm", "fro", "frr", "frs", "fuq", "fur", "fuv", "fvr", "fy", "gaa",
			"gay", "gba", "gbm", "gez", "gil", "gl", "glk", "gmh", "gn", "goh", "gom", "gon", "gor",
			"got", "grb", "gsw", "guc", "gum", "gur", "guz", "gwi", "ha", "hai", "haw", "haz",
			"hil", "hit", "hmn", "hnd", "hne", "hno", "ho", "hoc", "hoj", "hrx", "ht", "hu", "hup",
			"hus", "hz", "ia", "iba", "ibb", "ie", "ik", "ilo", "inh", "io", "jam", "jgo", "jmc",
			"jpr", "jrb", "ka", "kaa", "kac", "kaj", "kam", "kaw", "kbd", "kcg", "kfr", "kfy", "kg",
			"kha", "khn", "kho", "ki", "kj", "kk", "kkj", "kl", "kln", "kmb", "kmr", "kok", "kpe",
			"kr", "krc", "kri", "krl", "kru", "ks", "ksb", "ku", "kum", "kut", "kv", "kxm", "ky",
			"la", "lad", "laj", "lam", "lb", "lez", "lfn", "lg", "li", "lij", "ljp", "lki", "lmn",
			"lmo", "lol", "loz", "lrc", "lu", "lua", "lui", "lun", "luo", "lus", "luy", "luz",
			"mad", "mag", "mai", "mak", "man", "mas", "mdf", "mdh", "mdr", "men", "mer", "mfa",
			"mga", "mgh", "mgo", "mh", "mhr", "mic", "min", "mjw", "ml", "mn", "mnc", "mni", "mnw",
			"moe", "moh", "mos", "mr", "mrh", "mtr", "mus", "mwk", "mwl", "mwr", "mxc", "myv",
			"myx", "mzn", "na", "nah", "nap", "nb", "nd", "ndc", "nds", "ne", "new", "ng", "ngl",
			"nia", "nij", "niu", "nl", "nn", "nnh", "nod", "noe", "nog", "non", "nr", "nuk", "nv",
			"nwc", "ny", "nym", "nyn", "nyo", "nzi", "oj", "om", "or", "os", "ota", "otk", "ovd",
			"pag", "pal", "pam", "pap", "pau", "pbb", "pdt", "peo", "phn", "pi", "pms", "pon",
			"pro", "ps", "pwn", "qu", "quc", "qug", "qya", "raj", "rap", "rar", "rcf", "rej", "rhg",
			"rif", "rkt", "rm", "rmt", "rn", "rng", "rof", "rom", "rue", "rup", "rw", "rwk", "sad",
			"sai", "sam", "saq", "sas", "sc", "sck", "sco", "sd", "sdh", "sef", "seh", "sel", "sga",
			"sgn", "sgs", "shn", "sid", "sjd", "skr", "sm", "sml", "sn", "snk", "so", "sog", "sou",
			"sq", "srn", "srr", "ss", "ssy", "st", "suk", "sus", "sux", "sv", "sw", "swg", "swv",
			"sxu", "syc", "syl", "syr", "szy", "ta", "tay", "tcy", "te", "tem", "teo", "ter", "tet",
			"tig", "tiv", "tk", "tkl", "tli", "tly", "tmh", "tn", "tog", "tr", "trv", "ts", "tsg",
			"tsi", "tsj", "tts", "tum", "tvl", "tw", "ty", "tyv", "tzj", "tzl", "udm", "ug", "uga",
			"umb", "und", "unr", "ur", "uz", "vai", "ve", "vls", "vmf", "vmw", "vo", "vot", "vro",
			"vun", "wae", "wal", "war", "was", "wbq", "wbr", "wep", "wtm", "xal", "xh", "xnr",
			"xog", "yao", "yap", "yi", "yua", "za", "zap", "zbl", "zen", "zgh", "zun", "zza",
		],
	),
	(
		PluralRuleId::BENGALI,
		&[
			"ach", "ady", "ak", "am", "arn", "as", "bh", "bho", "bn", "csw", "doi", "fa", "ff",
			"frc", "frp", "gu", "gug", "gun", "guw", "hi", "hy", "kab", "kn", "ln", "mfe", "mg",
			"mi", "mia", "nso", "oc", "pa", "pcm", "pt", "qdt", "qtp", "si", "tg", "ti", "wa", "zu",
		],
	),
	(
		PluralRuleId::ICELANDIC,
		&["is"],
	),
	(
		PluralRuleId::FILIPINO,
		&["fil"],
	),
	(
		PluralRuleId::ONE_FORM,
		&[
			"ace", "ay", "bm", "bo", "cdo", "cpx", "crh", "dz", "gan", "hak", "hnj", "hsn", "id",
			"ig", "ii", "ja", "jbo", "jv", "kde", "kea", "km", "ko", "kos", "lkt", "lo", "lzh",
			"ms", "my", "nan", "nqo", "osa", "sah", "ses", "sg", "son", "su", "th", "tlh", "to",
			"tok", "tpi", "tt", "vi", "wo", "wuu", "yo", "yue", "zh",
		],
	),
	(
		PluralRuleId::CZECH,
		&["cpp", "cs", "sk"],
	),
	(
		PluralRuleId::RUSSIAN,
		&["be", "bs", "cnr", "hr", "ru", "sr", "uk", "wen"],
	),
	(
		PluralRuleId::POLISH,
		&["csb", "pl", "szl"],
	),
	(
		PluralRuleId::LATVIAN,
		&["lv", "prg"],
	),
	(
		PluralRuleId::LITHUANIAN,
		&["lt"],
	),
	(
		PluralRuleId::FRENCH,
		&["fr"],
	),
	(
		PluralRuleId::CATALAN,
		&["ca", "es", "it"],
	),
	(
		PluralRuleId::SLOVENIAN,
		&["sl"],
	),
	(
		PluralRuleId::ARABIC,
		&["ar"],
	),
];

/// Plural rule for a language tag such as `"ru"`, `"pt-BR"` or `"de_AT"`
///
/// Unknown languages are logged and get the common two-form rule.
pub fn rule_for_language(tag: &str) -> PluralRuleId {
	// Country-specific rules first
	match tag.replace('_', "-").as_str() {
		"pt-BR" => return PluralRuleId::FRENCH,
		"pt-PT" => return PluralRuleId::CATALAN,
		_ => {}
	}

	let lang = tag.split(['-', '_']).next().unwrap_or(tag);
	LANGUAGE_RULES
		.iter()
		.find(|(_, languages)| languages.contains(&lang))
		.map(|(id, _)| *id)
		.unwrap_or_else(|| {
			tracing::warn!(language = %tag, "no plural rule defined for language");
			PluralRuleId::DEFAULT
		})
}
