use bsd3gen::license::{generate, render, LicenseError, LICENSE_NAME};

const DISCLAIMER: &str = "THIS SOFTWARE IS PROVIDED BY THE COPYRIGHT HOLDERS AND CONTRIBUTORS \"AS IS\"
AND ANY EXPRESS OR IMPLIED WARRANTIES, INCLUDING, BUT NOT LIMITED TO, THE
IMPLIED WARRANTIES OF MERCHANTABILITY AND FITNESS FOR A PARTICULAR PURPOSE ARE
DISCLAIMED. IN NO EVENT SHALL THE COPYRIGHT HOLDER OR CONTRIBUTORS BE LIABLE
FOR ANY DIRECT, INDIRECT, INCIDENTAL, SPECIAL, EXEMPLARY, OR CONSEQUENTIAL
DAMAGES (INCLUDING, BUT NOT LIMITED TO, PROCUREMENT OF SUBSTITUTE GOODS OR
SERVICES; LOSS OF USE, DATA, OR PROFITS; OR BUSINESS INTERRUPTION) HOWEVER
CAUSED AND ON ANY THEORY OF LIABILITY, WHETHER IN CONTRACT, STRICT LIABILITY,
OR TORT (INCLUDING NEGLIGENCE OR OTHERWISE) ARISING IN ANY WAY OUT OF THE USE
OF THIS SOFTWARE, EVEN IF ADVISED OF THE POSSIBILITY OF SUCH DAMAGE.";

#[test]
fn copyright_line_is_substituted() {
    let text = render("2024", "Jane Doe");
    assert!(text.as_str().contains("Copyright (c) 2024, Jane Doe"));
}

#[test]
fn disclaimer_is_unmodified() {
    let text = render("2024", "Jane Doe");
    assert!(text.as_str().ends_with(DISCLAIMER));
}

#[test]
fn output_starts_with_title_and_blank_line() {
    let text = render("2024", "Jane Doe");
    let mut lines = text.lines();
    assert_eq!(lines.next(), Some(LICENSE_NAME));
    assert_eq!(lines.next(), Some(""));
    assert_eq!(lines.next(), Some("Copyright (c) 2024, Jane Doe"));
    assert_eq!(lines.next(), Some("All rights reserved."));
}

#[test]
fn three_numbered_conditions() {
    let text = render("2024", "Jane Doe");
    for prefix in ["1. Redistributions of source", "2. Redistributions in binary", "3. Neither the name"] {
        assert!(text.as_str().contains(prefix), "missing {prefix:?}");
    }
}

#[test]
fn render_is_deterministic() {
    assert_eq!(render("2023", "Acme Inc."), render("2023", "Acme Inc."));
}

#[test]
fn values_are_inserted_verbatim() {
    let text = render(" 99", "{author} <a@b.c>");
    assert!(text
        .as_str()
        .contains("Copyright (c)  99, {author} <a@b.c>\nAll rights reserved."));
}

#[test]
fn display_matches_as_str() {
    let text = render("2023", "Acme");
    assert_eq!(text.to_string(), text.as_str());
    assert_eq!(text.clone().into_string(), text.as_str());
}

#[test]
fn generate_reports_invalid_year() {
    let err = generate("99", "Acme").unwrap_err();
    assert_eq!(
        err,
        LicenseError::InvalidYear {
            input: "99".to_string()
        }
    );
    assert!(err.to_string().contains("4 digits"));
}

#[test]
fn generate_reports_empty_author() {
    assert_eq!(generate("2024", "   ").unwrap_err(), LicenseError::EmptyAuthor);
}

#[test]
fn generate_trims_author() {
    let text = generate("2023", "  Acme Inc.  ").unwrap();
    assert_eq!(text, render("2023", "Acme Inc."));
}
