use deliciousrs::marker::Marker;
use deliciousrs::models::Bookmark;
use owo_colors::OwoColorize;

pub trait Colorize {
    fn to_colored(&self) -> String;
    fn to_plain(&self) -> String;

    fn render(&self, nc: bool) -> String {
        if nc {
            self.to_plain()
        } else {
            self.to_colored()
        }
    }
}

pub struct ColorizeMarker<'a> {
    pub line: usize,
    pub marker: &'a Marker<'a>,
}

impl Colorize for ColorizeMarker<'_> {
    fn to_colored(&self) -> String {
        format!(
            "{}: {}\n",
            self.line.to_string().bright_blue(),
            self.marker.raw.bold().green()
        )
    }

    fn to_plain(&self) -> String {
        format!("{}: {}\n", self.line, self.marker.raw)
    }
}

pub struct ColorizeBookmark<'a>(pub &'a Bookmark);

impl<'a> ColorizeBookmark<'a> {
    fn lines(&self) -> (String, String, Option<&'a str>, String) {
        let title = self.0.title().unwrap_or("(untitled)").to_string();
        let url = self.0.url().unwrap_or_default().to_string();
        let description = self.0.description().filter(|d| !d.trim().is_empty());
        let tags: Vec<&str> = self.0.tags().iter().map(String::as_str).collect();
        (title, url, description, tags.join(", "))
    }
}

impl Colorize for ColorizeBookmark<'_> {
    fn to_colored(&self) -> String {
        let (title, url, description, tags) = self.lines();
        let mut s = format!("    {}\n", title.bold());
        s.push_str(&format!("    {} {}\n", ">".red(), url.yellow()));
        if let Some(description) = description {
            s.push_str(&format!("    {} {}\n", "+".red(), description));
        }
        if !tags.is_empty() {
            s.push_str(&format!("    {} {}\n", "#".red(), tags.blue()));
        }
        s
    }

    fn to_plain(&self) -> String {
        let (title, url, description, tags) = self.lines();
        let mut s = format!("    {}\n    > {}\n", title, url);
        if let Some(description) = description {
            s.push_str(&format!("    + {}\n", description));
        }
        if !tags.is_empty() {
            s.push_str(&format!("    # {}\n", tags));
        }
        s
    }
}
