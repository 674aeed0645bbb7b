//! Built-in keyword pattern tables.
//!
//! Each table is an ordered list of alternatives for one category tag.
//! Patterns are matched case-insensitively against the title; `\b` keeps
//! short terms like `ai`, `ml` or `api` from matching inside other words.

use crate::CategoryTag;

pub const WEB_DEV: &[&str] = &[
    r"\bweb\s+(?:developer|development|designer?|design)\b",
    r"\bwordpress\b",
    r"\bshopify\b",
    r"\bwix\b",
    r"\bsquarespace\b",
    r"\bwebsite\s+(?:developer?|development|designer?|design)\b",
    r"\bfront[\s-]*end\b",
    r"\bback[\s-]*end\b",
    r"\bfull[\s-]*stack\b",
    r"\bweb\s+programmer\b",
    r"\bui\s*/?\s*ux\b",
    r"\bhtml\b",
    r"\bcss\b",
    r"\bbootstrap\b",
    r"\btailwind\b",
];

pub const SOFTWARE_DEV: &[&str] = &[
    r"\bsoftware\s+(?:developer|development|engineer)\b",
    r"\b(?:senior|jr|junior)\s+developer\b",
    r"\bpython\b",
    r"\bjava\b",
    r"\bjavascript\b",
    r"\breact\b",
    r"\bangular\b",
    r"\bvue\.?js\b",
    r"\bnode\.?js\b",
    r"\bprogrammer\b",
    r"\bcoding\b",
    r"\bapi\b",
    r"\bruby\b",
    r"\bphp\b",
    r"\blaravel\b",
    r"\bdjango\b",
    r"\bspring\b",
    r"\bdocker\b",
];

pub const MOBILE_DEV: &[&str] = &[
    r"\bmobile\s+(?:developer|development|app)\b",
    r"\bios\s+(?:developer|development)\b",
    r"\bandroid\s+(?:developer|development)\b",
    r"\bapp\s+(?:developer|development)\b",
    r"\bswift\b",
    r"\bkotlin\b",
    r"\breact\s+native\b",
    r"\bflutter\b",
    r"\bxcode\b",
    r"\bandroid\s+studio\b",
];

pub const TECH_MISC: &[&str] = &[
    r"\bdevops\b",
    r"\bcloud\b",
    r"\baws\b",
    r"\bazure\b",
    r"\bgcp\b",
    r"\bdatabase\b",
    r"\bsql\b",
    r"\bmongo\b",
    r"\bpostgres\b",
    r"\bdata\s+(?:scientist|science)\b",
    r"\bml\b",
    r"\bai\b",
    r"\bartificial\s+intelligence\b",
    r"\bmachine\s+learning\b",
    r"\bdeep\s+learning\b",
    r"\bgit\b",
    r"\blinux\b",
    r"\bci/cd\b",
    r"\bkubernetes\b",
    r"\bk8s\b",
];

/// Default tag → pattern tables, in classification order.
pub const DEFAULT_TABLES: &[(CategoryTag, &[&str])] = &[
    (CategoryTag::WebDev, WEB_DEV),
    (CategoryTag::SoftwareDev, SOFTWARE_DEV),
    (CategoryTag::MobileDev, MOBILE_DEV),
    (CategoryTag::TechMisc, TECH_MISC),
];
