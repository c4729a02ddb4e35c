//! Static README boilerplate.
//!
//! Everything outside the two placeholder markers is fixed text; the
//! renderer only ever substitutes the generated listing and body blocks.

/// Placeholder replaced by the per-class listing block.
pub const LISTING_MARK: &str = "#GENERATED_LISTING#";

/// Placeholder replaced by the per-class detail block.
pub const BODY_MARK: &str = "#GENERATED_BODY#";

pub const README_TEMPLATE: &str = r#"# Assertion helpers

Provides additional assertions to be used in unit tests.
The assertions are provided through traits, so no changes are needed in the
hierarchy of existing test classes.

The additional assertions are provided through the traits:
#GENERATED_LISTING#

See the traits and assertions listing for more details.

### Install

Add the package to your development dependencies:

```
"require-dev": {
    "acme/assertion-helpers" : "^1.0"
}
```

<sub>The package is hinted `-dev` because assertions are typically only
needed while testing.</sub>

### Usage

Example usage of `FileSystemAssertTrait`:

```
class MyTest extends TestCase
{
    use \Acme\Assert\FileSystemAssertTrait;

    public function testFilePermissionsOfThisFile()
    {
        $this->assertFileHasPermissions('lrwxrwxrwx', __FILE__);
    }
}
```

# Traits and assertions listing
#GENERATED_BODY#
### License

The project is released under the MIT license, see the LICENSE file.

### Semantic versioning

The project follows [Semantic Versioning](http://semver.org/).
"#;

/// Substitute the generated blocks into the template. Pure: identical
/// inputs produce identical output.
pub fn substitute(listing: &str, body: &str) -> String {
    README_TEMPLATE
        .replace(LISTING_MARK, listing)
        .replace(BODY_MARK, body)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn template_carries_each_marker_exactly_once() {
        assert_eq!(README_TEMPLATE.matches(LISTING_MARK).count(), 1);
        assert_eq!(README_TEMPLATE.matches(BODY_MARK).count(), 1);
    }

    #[test]
    fn substitute_replaces_both_markers() {
        let out = substitute("LISTING", "BODY");
        assert!(out.contains("LISTING"));
        assert!(out.contains("BODY"));
        assert!(!out.contains(LISTING_MARK));
        assert!(!out.contains(BODY_MARK));
    }

    #[test]
    fn substitution_is_deterministic() {
        assert_eq!(substitute("a", "b"), substitute("a", "b"));
    }
}
