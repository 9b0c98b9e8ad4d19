use once_cell::sync::Lazy;
use std::collections::HashMap;

/// Raw spellings (classifier leaves, SPDX ids and common free-text names)
/// and the canonical license name each resolves to. Keys are lower case.
///
/// Spellings that do not pin down a single license ("BSD License",
/// "Apache Software License", "Zope Public License") are deliberately absent
/// and pass through verbatim.
const ENTRIES: &[(&str, &str)] = &[
    // MIT
    ("mit", "MIT"),
    ("mit license", "MIT"),
    ("mit licence", "MIT"),
    ("expat", "MIT"),
    ("expat license", "MIT"),
    ("mit-0", "MIT-0"),
    ("mit no attribution license (mit-0)", "MIT-0"),
    // Apache
    ("apache-2.0", "Apache-2.0"),
    ("apache 2.0", "Apache-2.0"),
    ("apache 2", "Apache-2.0"),
    ("apache license 2.0", "Apache-2.0"),
    ("apache license, version 2.0", "Apache-2.0"),
    ("apache software license 2.0", "Apache-2.0"),
    ("apache-1.1", "Apache-1.1"),
    // BSD
    ("0bsd", "0BSD"),
    ("bsd-2-clause", "BSD-2-Clause"),
    ("bsd 2-clause", "BSD-2-Clause"),
    ("bsd 2-clause license", "BSD-2-Clause"),
    ("simplified bsd", "BSD-2-Clause"),
    ("bsd-3-clause", "BSD-3-Clause"),
    ("bsd 3-clause", "BSD-3-Clause"),
    ("bsd 3-clause license", "BSD-3-Clause"),
    ("new bsd", "BSD-3-Clause"),
    ("new bsd license", "BSD-3-Clause"),
    ("modified bsd", "BSD-3-Clause"),
    // ISC
    ("isc", "ISC"),
    ("isc license", "ISC"),
    ("isc license (iscl)", "ISC"),
    // Mozilla
    ("mpl-1.1", "MPL-1.1"),
    ("mozilla public license 1.1 (mpl 1.1)", "MPL-1.1"),
    ("mpl-2.0", "MPL-2.0"),
    ("mpl 2.0", "MPL-2.0"),
    ("mozilla public license 2.0", "MPL-2.0"),
    ("mozilla public license 2.0 (mpl 2.0)", "MPL-2.0"),
    // GNU GPL family
    ("gpl-2.0", "GPL-2.0-only"),
    ("gpl-2.0-only", "GPL-2.0-only"),
    ("gplv2", "GPL-2.0-only"),
    ("gnu general public license v2 (gplv2)", "GPL-2.0-only"),
    ("gpl-2.0+", "GPL-2.0-or-later"),
    ("gpl-2.0-or-later", "GPL-2.0-or-later"),
    ("gnu general public license v2 or later (gplv2+)", "GPL-2.0-or-later"),
    ("gpl-3.0", "GPL-3.0-only"),
    ("gpl-3.0-only", "GPL-3.0-only"),
    ("gplv3", "GPL-3.0-only"),
    ("gnu general public license v3 (gplv3)", "GPL-3.0-only"),
    ("gpl-3.0+", "GPL-3.0-or-later"),
    ("gpl-3.0-or-later", "GPL-3.0-or-later"),
    ("gnu general public license v3 or later (gplv3+)", "GPL-3.0-or-later"),
    ("lgpl-2.0-only", "LGPL-2.0-only"),
    ("gnu library or lesser general public license (lgpl)", "LGPL-2.0-or-later"),
    ("gnu lesser general public license v2 (lgplv2)", "LGPL-2.0-only"),
    ("lgpl-2.0-or-later", "LGPL-2.0-or-later"),
    ("gnu lesser general public license v2 or later (lgplv2+)", "LGPL-2.0-or-later"),
    ("lgpl-2.1", "LGPL-2.1-only"),
    ("lgpl-2.1-only", "LGPL-2.1-only"),
    ("lgplv2.1", "LGPL-2.1-only"),
    ("lgpl-2.1-or-later", "LGPL-2.1-or-later"),
    ("lgpl-3.0", "LGPL-3.0-only"),
    ("lgpl-3.0-only", "LGPL-3.0-only"),
    ("lgplv3", "LGPL-3.0-only"),
    ("gnu lesser general public license v3 (lgplv3)", "LGPL-3.0-only"),
    ("lgpl-3.0-or-later", "LGPL-3.0-or-later"),
    ("gnu lesser general public license v3 or later (lgplv3+)", "LGPL-3.0-or-later"),
    ("agpl-3.0", "AGPL-3.0-only"),
    ("agpl-3.0-only", "AGPL-3.0-only"),
    ("gnu affero general public license v3", "AGPL-3.0-only"),
    ("agpl-3.0-or-later", "AGPL-3.0-or-later"),
    ("gnu affero general public license v3 or later (agplv3+)", "AGPL-3.0-or-later"),
    // Python
    ("psf-2.0", "PSF-2.0"),
    ("python software foundation license", "PSF-2.0"),
    ("python-2.0", "Python-2.0"),
    // Public domain style
    ("unlicense", "Unlicense"),
    ("the unlicense (unlicense)", "Unlicense"),
    ("cc0-1.0", "CC0-1.0"),
    ("cc0 1.0 universal (cc0 1.0) public domain dedication", "CC0-1.0"),
    // Others with an unambiguous classifier
    ("epl-1.0", "EPL-1.0"),
    ("eclipse public license 1.0 (epl-1.0)", "EPL-1.0"),
    ("epl-2.0", "EPL-2.0"),
    ("eclipse public license 2.0 (epl-2.0)", "EPL-2.0"),
    ("eupl-1.2", "EUPL-1.2"),
    ("european union public licence 1.2 (eupl 1.2)", "EUPL-1.2"),
    ("bsl-1.0", "BSL-1.0"),
    ("boost software license 1.0 (bsl-1.0)", "BSL-1.0"),
    ("hpnd", "HPND"),
    ("historical permission notice and disclaimer (hpnd)", "HPND"),
    ("ncsa", "NCSA"),
    ("university of illinois/ncsa open source license", "NCSA"),
    ("zlib", "Zlib"),
    ("zlib/libpng license", "Zlib"),
    ("upl-1.0", "UPL-1.0"),
    ("universal permissive license (upl)", "UPL-1.0"),
    ("artistic-2.0", "Artistic-2.0"),
    ("wtfpl", "WTFPL"),
];

static TABLE: Lazy<HashMap<&'static str, &'static str>> =
    Lazy::new(|| ENTRIES.iter().copied().collect());

/// Look up the canonical name for a raw license spelling.
///
/// Matching ignores case and surrounding whitespace.
pub fn canonical_name(raw: &str) -> Option<&'static str> {
    let key = raw.trim().to_lowercase();
    TABLE.get(key.as_str()).copied()
}

/// Resolve a raw spelling, keeping it verbatim (trimmed) when the table has
/// no entry for it.
pub fn resolve_or_verbatim(raw: &str) -> String {
    canonical_name(raw)
        .map(str::to_string)
        .unwrap_or_else(|| raw.trim().to_string())
}
