//! Reusable file contents.

/// The installer's default ownership signature
pub const SIGNATURE: &str = "<brad @=\"bjc.id.au\" />";

pub const SKELETON_MIN_PHP: &str = "<?php\n// <brad @=\"bjc.id.au\" />\n// minifier front controller v2\nrequire __DIR__ . '/lib/min.php';\n";

pub const SKELETON_HTACCESS: &str = "# <brad @=\"bjc.id.au\" />\nRewriteEngine On\nRewriteRule ^(.*)$ min.php?f=$1 [L,QSA]\n";

pub const SKELETON_APP_JS: &str = "console.log('assetmini');\n";

pub const SKELETON_SITE_CSS: &str = "body { margin: 0; }\n";

/// A previously installed `min.php` that still carries the signature
pub const OWNED_OLD_MIN_PHP: &str = "<?php\n// <brad @=\"bjc.id.au\" />\n// minifier front controller v1\n";

/// A `min.php` the user rewrote and took ownership of
pub const USER_MIN_PHP: &str = "<?php\n// hand-tuned by the site owner\n";
